//! SHA256 double-hashing and Base58Check checksums.

use sha2::{Digest, Sha256};

/// Length of a decoded Base58Check address: version + 20-byte hash + checksum.
pub const DECODED_LEN: usize = 25;

/// Length of the checksum appended to a Base58Check payload.
pub const CHECKSUM_LEN: usize = 4;

/// Bitcoin's double SHA256: SHA256(SHA256(data)).
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut result = [0u8; 32];
    result.copy_from_slice(&second);
    result
}

/// The Base58Check checksum of a payload: the first four bytes of its double SHA256.
#[inline]
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    let mut result = [0u8; CHECKSUM_LEN];
    result.copy_from_slice(&hash[..CHECKSUM_LEN]);
    result
}

/// Verify the checksum embedded in a decoded address.
///
/// Anything other than exactly 25 bytes is answered with `false`. The
/// payload is `bytes[0..21]` and the embedded checksum is `bytes[21..25]`.
pub fn verify_checksum(bytes: &[u8]) -> bool {
    if bytes.len() != DECODED_LEN {
        return false;
    }

    let (payload, embedded) = bytes.split_at(DECODED_LEN - CHECKSUM_LEN);
    checksum(payload).as_slice() == embedded
}
