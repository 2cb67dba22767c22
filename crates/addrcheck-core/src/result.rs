//! Structured validation output.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Serialize, Serializer};

use crate::error::ValidationError;
use crate::network::{classify, AddressFormat, AddressType, Classification, Network};

/// The outcome of validating one address.
///
/// Serializes as
/// `{"valid", "address", "type", "network", "format", "error"?}`,
/// with `error` present only when `valid` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    /// The input, echoed verbatim.
    pub address: String,
    /// `None` until a version byte has been read; serialized as `unknown`.
    #[serde(rename = "type", serialize_with = "serialize_type_label")]
    pub address_type: Option<AddressType>,
    pub network: Network,
    pub format: AddressFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    /// A valid address with its classification.
    pub fn accepted(address: &str, classification: Classification) -> Self {
        ValidationResult {
            valid: true,
            address: address.into(),
            address_type: Some(classification.address_type),
            network: classification.network,
            format: classification.format,
            error: None,
        }
    }

    /// A rejected address.
    ///
    /// Network and format are always `unknown`. The type label is `unknown`
    /// too, except for an unrecognized version byte, which keeps its
    /// `unknown_0x..` label.
    pub fn rejected(address: &str, error: ValidationError) -> Self {
        let address_type = match error {
            ValidationError::UnrecognizedVersionByte(byte) => Some(classify(byte).address_type),
            _ => None,
        };
        ValidationResult {
            valid: false,
            address: address.into(),
            address_type,
            network: Network::Unknown,
            format: AddressFormat::Unknown,
            error: Some(error),
        }
    }

    /// The label as serialized in the `type` field.
    pub fn type_label(&self) -> String {
        match self.address_type {
            Some(label) => label.to_string(),
            None => "unknown".into(),
        }
    }
}

fn serialize_type_label<S: Serializer>(
    address_type: &Option<AddressType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match address_type {
        Some(label) => serializer.collect_str(label),
        None => serializer.serialize_str("unknown"),
    }
}

/// Summary over a batch of results, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Where the addresses came from, if the caller named it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub total_addresses: usize,
    pub valid_addresses: usize,
    pub invalid_addresses: usize,
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    pub fn new(source: Option<String>, results: Vec<ValidationResult>) -> Self {
        let valid_addresses = results.iter().filter(|r| r.valid).count();
        ValidationReport {
            source,
            total_addresses: results.len(),
            valid_addresses,
            invalid_addresses: results.len() - valid_addresses,
            results,
        }
    }

    /// True when every address in the batch was valid.
    pub fn all_valid(&self) -> bool {
        self.invalid_addresses == 0
    }
}
