//! Extracting candidate addresses from JSON documents.

use serde_json::Value;
use thiserror::Error;

/// Errors reading a JSON address document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The text is not JSON.
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The document parsed but held no addresses.
    #[error("No addresses found in input")]
    NoAddresses,
}

/// One address candidate. `None` stands for a JSON value that was not a string.
pub type Candidate = Option<String>;

/// Parse JSON text and extract the addresses it holds.
pub fn parse_addresses(json: &str) -> Result<Vec<Candidate>, InputError> {
    let document: Value = serde_json::from_str(json)?;
    extract_addresses(&document)
}

/// Extract addresses from a parsed document.
///
/// Accepted shapes:
/// - `{"address": ...}`
/// - `{"addresses": [...]}`
/// - `[...]` of strings and/or `{"address": ...}` objects; other items are skipped
pub fn extract_addresses(document: &Value) -> Result<Vec<Candidate>, InputError> {
    let candidates: Vec<Candidate> = match document {
        Value::Object(map) => {
            if let Some(single) = map.get("address") {
                vec![candidate(single)]
            } else if let Some(Value::Array(items)) = map.get("addresses") {
                items.iter().map(candidate).collect()
            } else {
                Vec::new()
            }
        }
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(Some(s.clone())),
                Value::Object(map) => map.get("address").map(candidate),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    if candidates.is_empty() {
        return Err(InputError::NoAddresses);
    }
    Ok(candidates)
}

fn candidate(value: &Value) -> Candidate {
    value.as_str().map(str::to_owned)
}
