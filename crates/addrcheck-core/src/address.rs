//! Base58Check address validation.
//!
//! An address passes five gates in order, and the first failing gate decides
//! the error:
//! 1. non-empty input
//! 2. length in 26..=35 characters
//! 3. Base58 decode into 25 bytes
//! 4. double SHA256 checksum
//! 5. version byte is one of 0x00, 0x05, 0x6f, 0xc4

use alloc::string::String;
use alloc::vec::Vec;

use crate::base58;
use crate::error::ValidationError;
use crate::hash::verify_checksum;
use crate::network::{classify, Classification};
use crate::result::ValidationResult;

/// Shortest accepted address, in characters.
pub const MIN_ADDRESS_LEN: usize = 26;
/// Longest accepted address, in characters.
pub const MAX_ADDRESS_LEN: usize = 35;

/// A Base58Check address that passed every gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedAddress {
    /// The leading version byte.
    pub version: u8,
    /// The 20-byte public-key or script hash.
    pub hash: [u8; 20],
    /// Network, format and type label for `version`.
    pub classification: Classification,
}

impl DecodedAddress {
    /// The 20-byte hash as lowercase hex.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }
}

/// Run the five validation gates and return the decoded parts.
pub fn parse_address(address: &str) -> Result<DecodedAddress, ValidationError> {
    if address.is_empty() {
        return Err(ValidationError::EmptyOrWrongType);
    }

    let length = address.chars().count();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&length) {
        return Err(ValidationError::InvalidLength { actual: length });
    }

    let decoded = base58::decode(address).ok_or(ValidationError::Base58DecodeFailure)?;

    if !verify_checksum(&decoded) {
        return Err(ValidationError::ChecksumMismatch);
    }

    let version = decoded[0];
    let classification = classify(version);
    if !classification.is_recognized() {
        return Err(ValidationError::UnrecognizedVersionByte(version));
    }

    let mut hash = [0u8; 20];
    hash.copy_from_slice(&decoded[1..21]);

    Ok(DecodedAddress {
        version,
        hash,
        classification,
    })
}

/// Validate one address. Never fails: every outcome is a populated result.
pub fn validate_address(address: &str) -> ValidationResult {
    match parse_address(address) {
        Ok(decoded) => ValidationResult::accepted(address, decoded.classification),
        Err(error) => ValidationResult::rejected(address, error),
    }
}

/// Validate a batch. One result per input, in input order, with no early exit.
pub fn validate_many<S: AsRef<str>>(addresses: &[S]) -> Vec<ValidationResult> {
    addresses
        .iter()
        .map(|address| validate_address(address.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{AddressFormat, Network};
    use alloc::string::ToString;
    use alloc::vec;

    fn error_text(result: &ValidationResult) -> String {
        result.error.map(|e| e.to_string().to_lowercase()).unwrap_or_default()
    }

    #[test]
    fn test_p2pkh_mainnet() {
        let address = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
        let result = validate_address(address);

        assert!(result.valid);
        assert_eq!(result.address, address);
        assert_eq!(result.network, Network::Mainnet);
        assert_eq!(result.format, AddressFormat::P2pkh);
        assert_eq!(result.type_label(), "mainnet_p2pkh");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_short_p2pkh_mainnet() {
        // 33 characters: the hash starts with a small byte.
        let result = validate_address("1wiz18xYmhRX6xStj2b9t1rwWX4GKUgpv");

        assert!(result.valid);
        assert_eq!(result.type_label(), "mainnet_p2pkh");
    }

    #[test]
    fn test_p2sh_mainnet() {
        for address in [
            "35hK24tcLEWcgNA4JxpvbkNkoAcDGqQPsP",
            "3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy",
        ] {
            let result = validate_address(address);

            assert!(result.valid, "{} should be valid", address);
            assert_eq!(result.network, Network::Mainnet);
            assert_eq!(result.format, AddressFormat::P2sh);
            assert_eq!(result.type_label(), "mainnet_p2sh");
        }
    }

    #[test]
    fn test_testnet_addresses() {
        let p2pkh = validate_address("mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn");
        assert!(p2pkh.valid);
        assert_eq!(p2pkh.network, Network::Testnet);
        assert_eq!(p2pkh.format, AddressFormat::P2pkh);
        assert_eq!(p2pkh.type_label(), "testnet_p2pkh");

        let p2sh = validate_address("2MzQwSSnBHWHqSAqtTVQ6v47XtaisrJa1Vc");
        assert!(p2sh.valid);
        assert_eq!(p2sh.network, Network::Testnet);
        assert_eq!(p2sh.format, AddressFormat::P2sh);
        assert_eq!(p2sh.type_label(), "testnet_p2sh");
    }

    #[test]
    fn test_parse_address_exposes_hash() {
        let decoded = parse_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();

        assert_eq!(decoded.version, 0x00);
        assert_eq!(decoded.hash_hex(), "62e907b15cbf27d5425399ebf6f0fb50ebb88f18");
    }

    #[test]
    fn test_invalid_checksum() {
        // Last character changed from a valid address
        let result = validate_address("1wiz18xYmhRX6xStj2b9t1rwWX4GKUgpX");

        assert!(!result.valid);
        assert_eq!(result.error, Some(ValidationError::ChecksumMismatch));
        assert!(error_text(&result).contains("checksum"));
        assert_eq!(result.network, Network::Unknown);
        assert_eq!(result.type_label(), "unknown");
    }

    #[test]
    fn test_empty_address() {
        let result = validate_address("");

        assert!(!result.valid);
        assert_eq!(result.error, Some(ValidationError::EmptyOrWrongType));
        assert_eq!(result.address, "");
    }

    #[test]
    fn test_length_bounds() {
        let too_short = validate_address("1wiz18x");
        assert_eq!(too_short.error, Some(ValidationError::InvalidLength { actual: 7 }));
        assert!(error_text(&too_short).contains("length"));

        let too_long = validate_address("1wiz18xYmhRX6xStj2b9t1rwWX4GKUgpv1234567890");
        assert!(error_text(&too_long).contains("length"));

        // Length is checked before the alphabet.
        for len in [1, 25, 36, 60] {
            let junk = "0".repeat(len);
            let result = validate_address(&junk);
            assert_eq!(result.error, Some(ValidationError::InvalidLength { actual: len }));
        }

        // At the bounds the next gate decides.
        for len in [26, 35] {
            let junk = "0".repeat(len);
            assert_eq!(
                validate_address(&junk).error,
                Some(ValidationError::Base58DecodeFailure)
            );
        }
    }

    #[test]
    fn test_length_counts_characters() {
        // 13 two-byte characters: 26 bytes but only 13 characters.
        let wide = "é".repeat(13);
        assert_eq!(
            validate_address(&wide).error,
            Some(ValidationError::InvalidLength { actual: 13 })
        );
    }

    #[test]
    fn test_excluded_characters_fail_decode() {
        for address in [
            "1wiz18xYmhRX6xStj2b9t1rwWX4GKUOOO",
            "1A0zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "1AIzP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "1AlzP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        ] {
            let result = validate_address(address);
            assert!(!result.valid);
            assert_eq!(result.error, Some(ValidationError::Base58DecodeFailure));
        }
    }

    #[test]
    fn test_overflowing_value_fails_decode() {
        let result = validate_address(&"z".repeat(35));
        assert_eq!(result.error, Some(ValidationError::Base58DecodeFailure));
    }

    #[test]
    fn test_extra_leading_one_is_rejected() {
        for address in [
            "11A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "135hK24tcLEWcgNA4JxpvbkNkoAcDGqQPsP",
        ] {
            let result = validate_address(address);

            assert!(!result.valid, "{} should be rejected", address);
            assert_eq!(result.error, Some(ValidationError::Base58DecodeFailure));
        }
    }

    #[test]
    fn test_all_ones_fails_checksum() {
        for len in [MIN_ADDRESS_LEN, 34, MAX_ADDRESS_LEN] {
            let result = validate_address(&"1".repeat(len));
            assert_eq!(result.error, Some(ValidationError::ChecksumMismatch));
        }
    }

    #[test]
    fn test_zero_hash_address() {
        // Version 0x00 with an all-zero hash, written almost entirely in '1's.
        let result = validate_address("1111111111111111111114oLvT2");

        assert!(result.valid);
        assert_eq!(result.type_label(), "mainnet_p2pkh");
    }

    #[test]
    fn test_unrecognized_version_byte() {
        let address = base58::encode_check(0x30, &[0x01; 20]);
        let result = validate_address(&address);

        assert!(!result.valid);
        assert_eq!(result.error, Some(ValidationError::UnrecognizedVersionByte(0x30)));
        assert_eq!(result.type_label(), "unknown_0x30");
        assert_eq!(result.network, Network::Unknown);
        assert_eq!(result.format, AddressFormat::Unknown);
        assert!(error_text(&result).contains("0x30"));
    }

    #[test]
    fn test_encode_check_builds_valid_addresses() {
        for network in [Network::Mainnet, Network::Testnet] {
            for version in [network.p2pkh_version().unwrap(), network.p2sh_version().unwrap()] {
                let address = base58::encode_check(version, &[0xab; 20]);
                let result = validate_address(&address);

                assert!(result.valid, "{} should be valid", address);
                assert_eq!(result.network, network);
            }
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        for address in [
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
            "1wiz18xYmhRX6xStj2b9t1rwWX4GKUgpX",
            "",
        ] {
            assert_eq!(validate_address(address), validate_address(address));
        }
    }

    #[test]
    fn test_validate_many_preserves_order() {
        let addresses = vec![
            "35hK24tcLEWcgNA4JxpvbkNkoAcDGqQPsP",
            "short",
            "1wiz18xYmhRX6xStj2b9t1rwWX4GKUgpX",
            "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa",
        ];
        let results = validate_many(&addresses);

        assert_eq!(results.len(), 4);
        for (result, address) in results.iter().zip(&addresses) {
            assert_eq!(result.address, *address);
        }
        assert_eq!(
            results.iter().map(|r| r.valid).collect::<Vec<_>>(),
            vec![true, false, false, true]
        );
    }

    #[test]
    fn test_validate_many_empty() {
        let none: [&str; 0] = [];
        assert!(validate_many(&none).is_empty());
    }
}
