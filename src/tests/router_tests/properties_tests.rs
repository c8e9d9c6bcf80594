// src/tests/router_tests/properties_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_json, fixture_state, get};
use serde_json::json;

#[test]
fn properties_returns_listings_and_all_charts() {
    let state = fixture_state();

    let mut resp = handle(get("/api/properties"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body = body_json(&mut resp);
    let listings = body["listings"].as_array().unwrap();
    assert_eq!(listings.len(), 3);

    // malformed record still comes through, fully defaulted
    assert_eq!(listings[2]["price"], json!(0.0));
    assert_eq!(listings[2]["zipcode"], json!(""));
    assert_eq!(listings[2]["homeStatus"], json!(""));

    let charts = body["charts"].as_object().unwrap();
    assert_eq!(charts.len(), 18);

    assert_eq!(charts["homeType"]["data"]["labels"], json!(["CONDO", "SINGLE_FAMILY"]));
    assert_eq!(charts["homeType"]["data"]["datasets"][0]["data"], json!([2, 1]));
    assert_eq!(charts["homeStatus"]["data"]["labels"], json!(["FOR_SALE", "Unknown"]));
    assert_eq!(charts["countByZip"]["data"]["labels"], json!(["78701", "78664", "N/A"]));
}

#[test]
fn query_and_top_k_reach_the_source() {
    let state = fixture_state();

    let mut resp = handle(get("/api/properties?q=round%20rock&topK=10"), &state).unwrap();
    let body = body_json(&mut resp);
    let ids: Vec<_> = body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!("2")]);

    let mut resp = handle(get("/api/properties?topK=1"), &state).unwrap();
    assert_eq!(body_json(&mut resp)["listings"].as_array().unwrap().len(), 1);

    // non-numeric topK falls back to the default limit
    let mut resp = handle(get("/api/properties?topK=lots"), &state).unwrap();
    assert_eq!(body_json(&mut resp)["listings"].as_array().unwrap().len(), 3);
}

#[test]
fn no_matches_gives_null_histograms() {
    let state = fixture_state();

    let mut resp = handle(get("/api/properties?q=nowhere"), &state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_json(&mut resp);
    assert_eq!(body["listings"], json!([]));
    assert!(body["charts"]["priceDist"].is_null());
    assert!(body["charts"]["areaDist"].is_null());
    assert!(body["charts"]["pricePerSqft"].is_null());
    assert_eq!(body["charts"]["countByCity"]["data"]["labels"], json!([]));
    assert_eq!(body["charts"]["scorePrice"]["data"]["datasets"][0]["data"], json!([]));
}

#[test]
fn health_is_ok() {
    let state = fixture_state();
    let mut resp = handle(get("/health"), &state).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(&mut resp), json!({ "status": "ok" }));
}
