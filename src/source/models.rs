use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// match
//  ├── id
//  ├── score
//  └── metadata
//       ├── price, bedrooms, bathrooms, livingArea, yearBuilt
//       ├── homeType, homeStatus, city
//       └── address   (JSON text: { "zipcode": ... })

/// One hit from the search service, as loosely typed as it arrives.
/// Nothing here is trusted; `Listing::from_raw` does all the coercion.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct RawRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub score: Value,
    #[serde(default, deserialize_with = "lenient_map")]
    pub metadata: Map<String, Value>,
}

/// Envelope returned by the search service and accepted by fixture files.
#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub matches: Vec<RawRecord>,
}

// A metadata value that isn't an object is treated as empty.
fn lenient_map<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}
