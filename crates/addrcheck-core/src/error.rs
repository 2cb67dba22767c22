//! Validation failures, one per gate of the validator.

use serde::{Serialize, Serializer};

use crate::address::{MAX_ADDRESS_LEN, MIN_ADDRESS_LEN};

/// Why an address was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Empty input, or a value that was not a string at all
    EmptyOrWrongType,
    /// Length outside 26..=35 characters
    InvalidLength { actual: usize },
    /// Character outside the alphabet, or a value too wide for 25 bytes
    Base58DecodeFailure,
    /// Embedded checksum does not match the double SHA256 of the payload
    ChecksumMismatch,
    /// Version byte is not one of the four known values
    UnrecognizedVersionByte(u8),
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::EmptyOrWrongType => write!(f, "Address must be a non-empty string"),
            ValidationError::InvalidLength { actual } => write!(
                f,
                "Invalid address length: {} (expected {}-{} characters)",
                actual, MIN_ADDRESS_LEN, MAX_ADDRESS_LEN
            ),
            ValidationError::Base58DecodeFailure => write!(f, "Failed to decode Base58 address"),
            ValidationError::ChecksumMismatch => write!(f, "Invalid checksum"),
            ValidationError::UnrecognizedVersionByte(byte) => {
                write!(f, "Unknown address version byte: 0x{:02x}", byte)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

// Serialized as the message text; callers match on substrings such as "checksum".
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
