//! Validation controller exposed to JavaScript.

use addrcheck_core::{ValidationError, ValidationReport, ValidationResult};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::input::{parse_addresses, Candidate, InputError};
use crate::stats::ValidationStats;

/// Options accepted by the `AddressValidator` constructor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorOptions {
    /// Log batch summaries to the console.
    pub verbose: bool,
    /// Pretty-print JSON produced by `report_json`.
    pub pretty: bool,
}

/// The main validation controller.
#[wasm_bindgen]
pub struct AddressValidator {
    /// Options fixed at construction.
    options: ValidatorOptions,
    /// Counters over everything validated so far.
    stats: ValidationStats,
}

#[wasm_bindgen]
impl AddressValidator {
    /// Create a new validator.
    ///
    /// # Arguments
    /// * `options` - `{ verbose?: boolean, pretty?: boolean }`, or `undefined`
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<AddressValidator, JsValue> {
        let options = if options.is_undefined() || options.is_null() {
            ValidatorOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?
        };

        Ok(AddressValidator {
            options,
            stats: ValidationStats::new(),
        })
    }

    /// Validate one value. Anything that is not a string fails as empty/wrong type.
    #[wasm_bindgen]
    pub fn validate(&mut self, value: JsValue) -> Result<JsValue, JsValue> {
        let result = validate_candidate(value.as_string().as_deref());
        self.stats.record(&result);
        to_js(&result)
    }

    /// Validate an array of values, returning results in the same order.
    #[wasm_bindgen]
    pub fn validate_many(&mut self, values: js_sys::Array) -> Result<JsValue, JsValue> {
        let results: Vec<ValidationResult> = values
            .iter()
            .map(|value| validate_candidate(value.as_string().as_deref()))
            .collect();

        self.stats.record_all(&results);
        self.log_batch(results.len());
        to_js(&results)
    }

    /// Validate every address in a JSON document and return a report.
    ///
    /// # Arguments
    /// * `json` - JSON text (see `input::extract_addresses` for the shapes)
    /// * `source` - Optional name for where the text came from
    #[wasm_bindgen]
    pub fn validate_json(
        &mut self,
        json: &str,
        source: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let report = self.report(json, source)?;
        to_js(&report)
    }

    /// Same as `validate_json`, rendered as JSON text.
    #[wasm_bindgen]
    pub fn report_json(&mut self, json: &str, source: Option<String>) -> Result<String, JsValue> {
        let report = self.report(json, source)?;
        render_report(&report, self.options.pretty)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Get current statistics.
    #[wasm_bindgen]
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        self.stats.to_js()
    }

    /// Clear statistics.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.stats = ValidationStats::new();
    }

    /// Whether console logging is on.
    #[wasm_bindgen(getter)]
    pub fn verbose(&self) -> bool {
        self.options.verbose
    }
}

impl AddressValidator {
    fn report(&mut self, json: &str, source: Option<String>) -> Result<ValidationReport, JsValue> {
        let report = build_report(json, source).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.stats.record_all(&report.results);
        self.log_batch(report.total_addresses);
        Ok(report)
    }

    fn log_batch(&self, count: usize) {
        if self.options.verbose {
            console_log(&format!("batch of {}; {}", count, self.stats.summary()));
        }
    }
}

/// Validate a single value without keeping statistics.
#[wasm_bindgen]
pub fn validate_address(value: JsValue) -> Result<JsValue, JsValue> {
    to_js(&validate_candidate(value.as_string().as_deref()))
}

/// Log to the browser console.
#[wasm_bindgen]
pub fn console_log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}

/// Validate a candidate; a non-string candidate echoes an empty address.
pub fn validate_candidate(candidate: Option<&str>) -> ValidationResult {
    match candidate {
        Some(address) => addrcheck_core::validate_address(address),
        None => ValidationResult::rejected("", ValidationError::EmptyOrWrongType),
    }
}

/// Parse a JSON document and validate every address in it.
pub fn build_report(json: &str, source: Option<String>) -> Result<ValidationReport, InputError> {
    let candidates: Vec<Candidate> = parse_addresses(json)?;
    let results = candidates
        .iter()
        .map(|candidate| validate_candidate(candidate.as_deref()))
        .collect();
    Ok(ValidationReport::new(source, results))
}

/// Render a report as JSON text.
pub fn render_report(report: &ValidationReport, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {:?}", e)))
}
