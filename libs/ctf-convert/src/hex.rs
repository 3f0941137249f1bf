//! Hexadecimal projections
//!
//! Hex input is case-insensitive, may carry a `0x`/`0X` prefix and must
//! describe whole bytes. Hex output is always lowercase without prefix.

use crate::error::{ConvertError, Result};
use crate::{binary, text};
use tracing::trace;

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Strip an optional `0x` / `0X` prefix
pub fn strip_prefix(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

fn invalid_digit(hex: &str, position: usize) -> ConvertError {
    let found = hex[position..].chars().next().unwrap_or_default();
    trace!(position, "rejecting hex digit");
    ConvertError::invalid_input(format!(
        "Invalid hex string '{}': non-hex character {:?} at position {}",
        hex, found, position
    ))
}

/// Decode a hex string into bytes
pub fn decode(hex: &str) -> Result<Vec<u8>> {
    let digits = strip_prefix(hex);

    // Report the first bad character before the length check so that
    // multi-byte characters never get split below.
    let nibbles = digits
        .bytes()
        .enumerate()
        .map(|(position, c)| nibble(c).ok_or_else(|| invalid_digit(digits, position)))
        .collect::<Result<Vec<u8>>>()?;
    if nibbles.len() % 2 != 0 {
        return Err(ConvertError::invalid_input(format!(
            "Invalid hex string '{}': odd number of digits ({})",
            digits,
            digits.len()
        )));
    }

    Ok(nibbles
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// Encode bytes as lowercase hex, two digits per byte
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(char::from(DIGITS[usize::from(b >> 4)]));
        out.push(char::from(DIGITS[usize::from(b & 0x0f)]));
    }
    out
}

pub fn hex_to_text(hex: &str) -> Result<String> {
    Ok(text::from_bytes(&decode(hex)?))
}

pub fn hex_to_decimal(hex: &str) -> Result<Vec<u8>> {
    decode(hex)
}

pub fn hex_to_binary(hex: &str) -> Result<Vec<String>> {
    Ok(binary::encode(&decode(hex)?))
}

/// Format one unsigned integer as lowercase hex, at least two digits
pub fn integer_to_hex(value: u128) -> String {
    format!("{:02x}", value)
}

/// Parse a whole hex string as a single unsigned integer
///
/// Unlike [`decode`], odd digit counts are accepted since the value is
/// not split into bytes.
pub fn hex_to_integer(hex: &str) -> Result<u128> {
    let digits = strip_prefix(hex);
    if digits.is_empty() {
        return Err(ConvertError::invalid_input("Empty hex string"));
    }

    digits.bytes().enumerate().try_fold(0u128, |acc, (position, c)| {
        let value = nibble(c).ok_or_else(|| invalid_digit(digits, position))?;
        acc.checked_mul(16)
            .and_then(|acc| acc.checked_add(u128::from(value)))
            .ok_or_else(|| {
                ConvertError::invalid_input(format!(
                    "Hex value '{}' does not fit in 128 bits",
                    digits
                ))
            })
    })
}
