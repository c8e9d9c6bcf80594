use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` into a JSON response with the given status.
pub fn json_response<T: Serialize>(status: u16, value: &T) -> ResultResp {
    let body = serde_json::to_vec(value)
        .map_err(|e| ServerError::Internal(format!("serialize response failed: {e}")))?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .map_err(|e| ServerError::Internal(e.to_string()))
}
