//! Running statistics for the validator.

use addrcheck_core::{Network, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Counters over every address a validator has seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationStats {
    /// Total addresses validated.
    pub total: u64,
    /// Addresses that passed every gate.
    pub valid: u64,
    /// Addresses that failed a gate.
    pub invalid: u64,
    /// Valid mainnet addresses.
    pub mainnet: u64,
    /// Valid testnet addresses.
    pub testnet: u64,
    /// Addresses that decoded but failed the checksum.
    pub checksum_failures: u64,
}

impl ValidationStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one result.
    pub fn record(&mut self, result: &ValidationResult) {
        self.total += 1;
        if result.valid {
            self.valid += 1;
            match result.network {
                Network::Mainnet => self.mainnet += 1,
                Network::Testnet => self.testnet += 1,
                Network::Unknown => {}
            }
        } else {
            self.invalid += 1;
            if result.error == Some(ValidationError::ChecksumMismatch) {
                self.checksum_failures += 1;
            }
        }
    }

    /// Count a batch of results.
    pub fn record_all<'a>(&mut self, results: impl IntoIterator<Item = &'a ValidationResult>) {
        for result in results {
            self.record(result);
        }
    }

    /// One-line summary for the console.
    pub fn summary(&self) -> String {
        format!(
            "{} validated: {} valid ({} mainnet, {} testnet), {} invalid ({} checksum)",
            self.total, self.valid, self.mainnet, self.testnet, self.invalid, self.checksum_failures
        )
    }

    /// Convert to JS value.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
    }
}
