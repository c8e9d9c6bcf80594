use crate::charts::PropertyReport;
use crate::errors::{ResultResp, ServerError};
use crate::responses::json_response;
use crate::source::RecordSource;
use astra::Request;
use serde_json::json;
use std::collections::HashMap;
use std::time::Instant;

pub const DEFAULT_TOP_K: usize = 500;

/// Everything a request handler needs. Shared read-only across workers.
pub struct AppState {
    pub source: Box<dyn RecordSource>,
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/api/properties") => {
            let params = parse_query(&req);
            property_data(state, &params)
        }
        ("GET", "/health") => json_response(200, &json!({ "status": "ok" })),
        _ => Err(ServerError::NotFound),
    }
}

/// GET /api/properties?q=…&topK=…
/// Fetch raw records, normalize them, and return listings with the chart catalog.
fn property_data(state: &AppState, params: &HashMap<String, String>) -> ResultResp {
    let start = Instant::now();
    let q = params.get("q").map(String::as_str).unwrap_or("");
    let top_k = parse_top_k(params.get("topK").map(String::as_str));

    let raw = state.source.query(q, top_k)?;
    let report = PropertyReport::from_raw(&raw);

    tracing::info!(
        query = q,
        top_k,
        listings = report.listings.len(),
        elapsed = ?start.elapsed(),
        "served property data"
    );

    json_response(200, &report)
}

/// Positive integer, otherwise the default.
pub fn parse_top_k(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_TOP_K)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| {
            url::form_urlencoded::parse(q.as_bytes())
                .into_owned()
                .collect()
        })
        .unwrap_or_default()
}
