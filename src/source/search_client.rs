// search_client.rs
use crate::source::{QueryResponse, RawRecord, RecordSource, SourceError};
use reqwest::blocking::Client;
use serde_json::json;
use std::time::{Duration, Instant};

const USER_AGENT: &str = concat!("property_charts/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the listing search service.
///
/// Sends `{"query", "topK", "includeMetadata"}` and expects the service to
/// answer with `{"matches": [...]}`.
pub struct SearchClient {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl SearchClient {
    pub fn new(url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Config(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
            api_key,
        })
    }
}

impl RecordSource for SearchClient {
    fn query(&self, query: &str, top_k: usize) -> Result<Vec<RawRecord>, SourceError> {
        let start = Instant::now();

        let mut req = self.client.post(&self.url).json(&json!({
            "query": query,
            "topK": top_k,
            "includeMetadata": true,
        }));
        if let Some(key) = &self.api_key {
            req = req.header("Api-Key", key);
        }

        let resp = req.send().map_err(|e| SourceError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: QueryResponse =
            serde_json::from_str(&text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

        tracing::debug!(
            matches = parsed.matches.len(),
            elapsed = ?start.elapsed(),
            "search service answered"
        );

        Ok(parsed.matches)
    }
}
