//! WebAssembly bindings for the Base58Check address validator.
//!
//! This crate provides JavaScript-accessible APIs for:
//! - Validating single addresses and ordered batches
//! - Validating the addresses held in a JSON document, with a summary report
//! - Running statistics and optional console logging

use wasm_bindgen::prelude::*;

pub mod input;
pub mod stats;
pub mod validator;

// Re-export main types for JS access
pub use stats::ValidationStats;
pub use validator::{AddressValidator, ValidatorOptions};

/// Initialize the WASM module with better panic messages.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
