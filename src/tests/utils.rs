use crate::router::AppState;
use crate::source::{FixtureSource, RawRecord, RecordSource, SourceError};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::{json, Value};
use std::io::Read;

/// A record source that always fails, standing in for an unreachable search service.
pub struct FailingSource;

impl RecordSource for FailingSource {
    fn query(&self, _query: &str, _top_k: usize) -> Result<Vec<RawRecord>, SourceError> {
        Err(SourceError::Network("connection refused".into()))
    }
}

pub fn fixture_state() -> AppState {
    let records: Vec<RawRecord> = serde_json::from_value(json!([
        {
            "id": "1",
            "score": 0.91,
            "metadata": {
                "price": "100000", "livingArea": "1000", "homeType": "CONDO",
                "bedrooms": "2", "bathrooms": "1", "yearBuilt": "1990",
                "homeStatus": "FOR_SALE", "city": "Austin",
                "address": "{\"zipcode\":\"78701\"}"
            }
        },
        {
            "id": "2",
            "score": 0.55,
            "metadata": {
                "price": "300000", "livingArea": "2000", "homeType": "SINGLE_FAMILY",
                "bedrooms": "4", "bathrooms": "3", "yearBuilt": "2004",
                "homeStatus": "FOR_SALE", "city": "Round Rock",
                "address": "{\"zipcode\":\"78664\"}"
            }
        },
        {
            "id": "3",
            "score": 0.5,
            "metadata": {
                "price": "oops", "homeType": "CONDO", "city": "Austin",
                "address": "{broken"
            }
        }
    ]))
    .unwrap();

    AppState {
        source: Box::new(FixtureSource::new(records)),
    }
}

pub fn failing_state() -> AppState {
    AppState {
        source: Box::new(FailingSource),
    }
}

pub fn get(uri: &str) -> Request {
    let mut req = Request::new(Body::empty());
    *req.method_mut() = Method::GET;
    *req.uri_mut() = uri.parse().unwrap();
    req
}

pub fn body_json(resp: &mut Response) -> Value {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
