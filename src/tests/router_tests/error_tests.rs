// src/tests/router_tests/error_tests.rs

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, failing_state, fixture_state, get};
use serde_json::json;

#[test]
fn unknown_route_is_not_found() {
    let state = fixture_state();

    let err = match handle(get("/nope"), &state) {
        Err(e) => e,
        Ok(resp) => panic!("expected 404, got {}", resp.status()),
    };
    assert!(matches!(err, ServerError::NotFound));

    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert_eq!(body_json(&mut resp), json!({ "error": "Not Found" }));
}

#[test]
fn upstream_failure_is_generic_500() {
    let state = failing_state();

    let err = match handle(get("/api/properties?q=austin"), &state) {
        Err(e) => e,
        Ok(resp) => panic!("expected upstream error, got {}", resp.status()),
    };
    assert!(matches!(err, ServerError::Upstream(_)));

    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 500);

    // the cause stays in the logs
    let body = body_json(&mut resp);
    assert_eq!(body, json!({ "error": "Failed to fetch property data" }));
    assert!(!body.to_string().contains("connection refused"));
}
