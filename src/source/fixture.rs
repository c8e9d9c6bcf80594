use crate::source::{QueryResponse, RawRecord, RecordSource, SourceError};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Serves records from a JSON file loaded once at startup.
/// Accepts either a bare array of records or a `{"matches": [...]}` envelope.
pub struct FixtureSource {
    records: Vec<RawRecord>,
}

impl FixtureSource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let text = fs::read_to_string(path.as_ref())?;
        let records = Self::parse(&text)?;
        tracing::info!(
            path = %path.as_ref().display(),
            records = records.len(),
            "loaded fixture records"
        );
        Ok(Self::new(records))
    }

    fn parse(text: &str) -> Result<Vec<RawRecord>, SourceError> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| SourceError::JsonParse(e.to_string()))?;

        if value.is_array() {
            serde_json::from_value(value).map_err(|e| SourceError::JsonParse(e.to_string()))
        } else {
            let envelope: QueryResponse =
                serde_json::from_value(value).map_err(|e| SourceError::JsonParse(e.to_string()))?;
            Ok(envelope.matches)
        }
    }
}

impl RecordSource for FixtureSource {
    fn query(&self, query: &str, top_k: usize) -> Result<Vec<RawRecord>, SourceError> {
        let needle = query.trim().to_lowercase();

        Ok(self
            .records
            .iter()
            .filter(|r| needle.is_empty() || matches_text(r, &needle))
            .take(top_k)
            .cloned()
            .collect())
    }
}

fn matches_text(record: &RawRecord, needle: &str) -> bool {
    let id_hit = match &record.id {
        Value::String(s) => s.to_lowercase().contains(needle),
        other => other.to_string().contains(needle),
    };

    id_hit
        || record.metadata.values().any(|v| match v {
            Value::String(s) => s.to_lowercase().contains(needle),
            Value::Number(n) => n.to_string().contains(needle),
            _ => false,
        })
}
