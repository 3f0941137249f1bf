//! Binary (bit-string) projections
//!
//! Each entry is exactly eight `0`/`1` characters, most significant bit
//! first.

use crate::error::{ConvertError, Result};
use crate::{hex, text};
use tracing::trace;

/// Parse one 8-bit string into a byte
pub fn parse_byte(bits: &str) -> Result<u8> {
    if bits.len() != 8 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
        trace!(bits, "rejecting bit string");
        return Err(ConvertError::invalid_input(format!(
            "Binary string must be 8 bits with only 0s and 1s: '{}'",
            bits
        )));
    }
    Ok(bits
        .bytes()
        .fold(0u8, |acc, bit| (acc << 1) | (bit - b'0')))
}

/// Format one byte as an 8-bit string
pub fn format_byte(byte: u8) -> String {
    format!("{:08b}", byte)
}

/// Decode a sequence of 8-bit strings into bytes
///
/// Every entry is validated before any is returned.
pub fn decode<S: AsRef<str>>(bits: &[S]) -> Result<Vec<u8>> {
    bits.iter().map(|b| parse_byte(b.as_ref())).collect()
}

/// Encode bytes as 8-bit strings
pub fn encode(bytes: &[u8]) -> Vec<String> {
    bytes.iter().map(|&b| format_byte(b)).collect()
}

pub fn binary_to_text<S: AsRef<str>>(bits: &[S]) -> Result<String> {
    Ok(text::from_bytes(&decode(bits)?))
}

pub fn binary_to_decimal<S: AsRef<str>>(bits: &[S]) -> Result<Vec<u8>> {
    decode(bits)
}

pub fn binary_to_hex<S: AsRef<str>>(bits: &[S]) -> Result<String> {
    Ok(hex::encode(&decode(bits)?))
}
