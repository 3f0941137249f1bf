//! Decimal (code point list) projections

use crate::error::{ConvertError, Result};
use crate::{binary, hex, text};
use tracing::trace;

/// Validate that every value is a byte (0-255)
pub fn to_bytes(values: &[i64]) -> Result<Vec<u8>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| {
                trace!(index, value, "rejecting decimal value");
                ConvertError::invalid_input(format!(
                    "Decimal value must be between 0-255: {} (position {})",
                    value, index
                ))
            })
        })
        .collect()
}

pub fn decimal_to_text(values: &[i64]) -> Result<String> {
    Ok(text::from_bytes(&to_bytes(values)?))
}

pub fn decimal_to_hex(values: &[i64]) -> Result<String> {
    Ok(hex::encode(&to_bytes(values)?))
}

pub fn decimal_to_binary(values: &[i64]) -> Result<Vec<String>> {
    Ok(binary::encode(&to_bytes(values)?))
}
