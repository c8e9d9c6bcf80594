// errors.rs
use astra::Response;
use thiserror::Error;

use crate::source::SourceError;

/// Errors originating from either the server logic
/// (routing, serialization) or downstream layers (record source).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Upstream Error: {0}")]
    Upstream(#[from] SourceError),

    #[error("Internal Server Error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::Upstream(_) | ServerError::Internal(_) => 500,
        }
    }

    /// Message that is safe to hand back to the caller.
    /// Upstream causes are logged, never returned.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound => "Not Found".to_string(),
            ServerError::Upstream(_) => "Failed to fetch property data".to_string(),
            ServerError::Internal(_) => "Internal Server Error".to_string(),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },

    #[error("no record source configured: set SEARCH_URL or FIXTURE_PATH")]
    NoSource,
}
