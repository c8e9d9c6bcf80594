// src/domain/listing.rs

use crate::source::RawRecord;
use serde::Serialize;
use serde_json::Value;

/// A listing as scraped by the search service, flattened and fully defaulted.
/// This acts as an anti-corruption layer: nothing past this point sees the raw
/// metadata map.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    /// Relevance of the record to the originating query.
    pub score: f64,

    pub price: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
    pub living_area: f64,
    pub year_built: f64,

    pub home_type: String,
    pub home_status: String,
    pub city: String,
    pub zipcode: String,
}

impl Listing {
    /// Creates a `Listing` from a raw search hit. Never fails: every absent,
    /// mistyped or unparsable field falls back to `0` or `""`.
    pub fn from_raw(raw: &RawRecord) -> Self {
        Self::from_raw_checked(raw).0
    }

    // Also reports whether the address text was present but malformed.
    fn from_raw_checked(raw: &RawRecord) -> (Self, bool) {
        let m = &raw.metadata;
        let (zipcode, bad_address) = match read_address(m.get("address")) {
            Address::Missing => (String::new(), false),
            Address::Zipcode(z) => (z, false),
            Address::Malformed => (String::new(), true),
        };

        let listing = Listing {
            id: id_string(&raw.id),
            score: coerce_number(Some(&raw.score)),
            price: coerce_number(m.get("price")),
            bedrooms: coerce_number(m.get("bedrooms")),
            bathrooms: coerce_number(m.get("bathrooms")),
            living_area: coerce_number(m.get("livingArea")),
            year_built: coerce_number(m.get("yearBuilt")),
            home_type: coerce_string(m.get("homeType")),
            home_status: coerce_string(m.get("homeStatus")),
            city: coerce_string(m.get("city")),
            zipcode,
        };

        (listing, bad_address)
    }

    /// Price divided by living area, with a zero area treated as 1,
    /// rounded to cents.
    pub fn price_per_sqft(&self) -> f64 {
        let area = if self.living_area == 0.0 { 1.0 } else { self.living_area };
        round_to_cents(self.price / area)
    }
}

/// Normalizes a batch, preserving input order.
pub fn normalize_all(raw: &[RawRecord]) -> Vec<Listing> {
    let mut bad_addresses = 0usize;
    let listings: Vec<Listing> = raw
        .iter()
        .map(|r| {
            let (listing, bad) = Listing::from_raw_checked(r);
            bad_addresses += usize::from(bad);
            listing
        })
        .collect();

    if bad_addresses > 0 {
        tracing::debug!(bad_addresses, "address metadata was not a JSON object");
    }

    listings
}

/// Numeric coercion: finite numbers pass, strings are trimmed and parsed
/// (blank is 0), booleans are 1/0, everything else is 0.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().unwrap_or(0.0)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// String coercion: falsy values (null, "", 0, false) become "",
/// numbers and booleans are stringified.
pub fn coerce_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Number(n)) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Some(Value::Bool(true)) => "true".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Formats a number the way it prints in JSON: `3`, `2.5`, never `3.0`.
pub fn format_number(n: f64) -> String {
    if n == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    format!("{n}")
}

pub fn round_to_cents(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

fn id_string(id: &Value) -> String {
    match id {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

enum Address {
    Missing,
    Zipcode(String),
    Malformed,
}

// The address arrives as JSON text. Malformed text, or anything that isn't an
// object, leaves the nested fields at their defaults.
fn read_address(value: Option<&Value>) -> Address {
    match value {
        None | Some(Value::Null) => Address::Missing,
        Some(Value::String(text)) if text.is_empty() => Address::Missing,
        Some(Value::Object(map)) => Address::Zipcode(coerce_string(map.get("zipcode"))),
        Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => Address::Zipcode(coerce_string(map.get("zipcode"))),
            _ => Address::Malformed,
        },
        Some(_) => Address::Malformed,
    }
}
