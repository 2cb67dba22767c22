//! Base58Check address validation.
//!
//! This crate provides pure Rust implementations of:
//! - Base58 decoding into fixed-width buffers (and the matching encoder)
//! - Double SHA256 checksum verification
//! - Version-byte classification into network, format and type label
//! - The five-gate address validator and its batch form
//!
//! Nothing here performs I/O or logs; every outcome is a returned value.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod address;
pub mod base58;
pub mod error;
pub mod hash;
pub mod network;
pub mod result;

pub use address::{parse_address, validate_address, validate_many, DecodedAddress};
pub use error::ValidationError;
pub use hash::{double_sha256, verify_checksum};
pub use network::{classify, AddressFormat, AddressType, Classification, Network};
pub use result::{ValidationReport, ValidationResult};
