//! Base58 decoding into fixed-width buffers, and the matching encoder.
//!
//! Decoding treats the input as one big base-58 numeral and accumulates it
//! directly into a big-endian byte buffer, so no bignum type is needed.

use alloc::string::String;
use alloc::vec::Vec;

use crate::hash::{checksum, DECODED_LEN};

/// The Bitcoin Base58 alphabet. `0`, `O`, `I` and `l` are left out.
pub const BASE58_ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// ASCII byte -> digit value, `-1` for bytes outside the alphabet.
const BASE58_DIGITS: [i8; 128] = build_digit_table();

const fn build_digit_table() -> [i8; 128] {
    let mut table = [-1i8; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        table[BASE58_ALPHABET[i] as usize] = i as i8;
        i += 1;
    }
    table
}

#[inline]
fn digit_value(c: u8) -> Option<u32> {
    match BASE58_DIGITS.get(c as usize) {
        Some(&d) if d >= 0 => Some(d as u32),
        _ => None,
    }
}

/// Decode an address into the 25-byte Base58Check layout.
pub fn decode(address: &str) -> Option<[u8; DECODED_LEN]> {
    decode_exact::<DECODED_LEN>(address)
}

/// Decode a Base58 string into exactly `N` big-endian bytes, zero-padded on the left.
///
/// Returns `None` on the first byte outside the alphabet, or when the value
/// together with the zero bytes written as leading `'1'`s does not fit in `N`
/// bytes.
pub fn decode_exact<const N: usize>(input: &str) -> Option<[u8; N]> {
    let mut buf = [0u8; N];

    for &c in input.as_bytes() {
        // value = value * 58 + digit, carried from the least significant byte up
        let mut carry = digit_value(c)?;
        for byte in buf.iter_mut().rev() {
            carry += (*byte as u32) * 58;
            *byte = (carry & 0xFF) as u8;
            carry >>= 8;
        }
        if carry != 0 {
            return None;
        }
    }

    // Each leading '1' is one 0x00 byte the numeral itself cannot carry. Those
    // bytes must land in the left padding; if the value already occupies them
    // the input is wider than N bytes. More '1's than N over an all-zero
    // buffer still decodes.
    let leading_ones = input.bytes().take_while(|&c| c == b'1').count();
    if buf[..leading_ones.min(N)].iter().any(|&b| b != 0) {
        return None;
    }

    Some(buf)
}

/// Encode bytes as Base58, one `'1'` per leading zero byte.
pub fn encode(data: &[u8]) -> String {
    let zeros = data.iter().take_while(|&&b| b == 0).count();

    // Little-endian base-58 digits of the non-zero tail.
    let mut digits: Vec<u8> = Vec::with_capacity(data.len() * 138 / 100 + 1);
    for &byte in &data[zeros..] {
        let mut carry = byte as u32;
        for d in digits.iter_mut() {
            carry += (*d as u32) << 8;
            *d = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    let mut result = String::with_capacity(zeros + digits.len());
    result.extend(core::iter::repeat('1').take(zeros));
    result.extend(digits.iter().rev().map(|&d| BASE58_ALPHABET[d as usize] as char));
    result
}

/// Build a Base58Check string from a version byte and payload.
pub fn encode_check(version: u8, payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(1 + payload.len() + 4);
    data.push(version);
    data.extend_from_slice(payload);
    let sum = checksum(&data);
    data.extend_from_slice(&sum);
    encode(&data)
}
