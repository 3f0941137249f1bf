//! Byte-wise XOR with cyclic padding
//!
//! When operands differ in length the shorter one is repeated: position
//! `i` of the result combines `longer[i]` with `shorter[i % shorter.len()]`.
//! The result always has the length of the longer operand.

use crate::error::{ConvertError, Result};
use crate::{decimal, text};
use tracing::debug;

/// XOR two byte sequences, cycling the shorter one
pub fn xor_bytes(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.is_empty() || b.is_empty() {
        return Err(ConvertError::invalid_input(format!(
            "XOR operands must not be empty (lengths {} and {})",
            a.len(),
            b.len()
        )));
    }

    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    debug!(
        longer = longer.len(),
        shorter = shorter.len(),
        "xor"
    );

    Ok(longer
        .iter()
        .zip(shorter.iter().cycle())
        .map(|(x, y)| x ^ y)
        .collect())
}

/// XOR two texts; the result is text in the single-byte range
pub fn xor_text(a: &str, b: &str) -> Result<String> {
    let a = text::to_bytes(a)?;
    let b = text::to_bytes(b)?;
    Ok(text::from_bytes(&xor_bytes(&a, &b)?))
}

/// XOR two decimal sequences; every input value must be 0-255
pub fn xor_decimal(a: &[i64], b: &[i64]) -> Result<Vec<u8>> {
    let a = decimal::to_bytes(a)?;
    let b = decimal::to_bytes(b)?;
    xor_bytes(&a, &b)
}
