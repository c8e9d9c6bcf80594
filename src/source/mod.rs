mod fixture;
mod models;
mod search_client;

pub use fixture::FixtureSource;
pub use models::{QueryResponse, RawRecord};
pub use search_client::SearchClient;

use crate::config::SourceConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// The external collaborator that turns a free-text query into raw records.
/// Implementations must be shareable across the server's worker threads.
pub trait RecordSource: Send + Sync {
    fn query(&self, query: &str, top_k: usize) -> Result<Vec<RawRecord>, SourceError>;
}

/// Builds the configured record source.
pub fn from_config(cfg: &SourceConfig) -> Result<Box<dyn RecordSource>, SourceError> {
    match cfg {
        SourceConfig::Search {
            url,
            api_key,
            timeout,
        } => Ok(Box::new(SearchClient::new(url, api_key.clone(), *timeout)?)),
        SourceConfig::Fixture { path } => Ok(Box::new(FixtureSource::from_file(path)?)),
    }
}
