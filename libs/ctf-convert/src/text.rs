//! Text projections
//!
//! Text is restricted to the single-byte range: every character maps to
//! exactly one byte (its code point), and every byte decodes back to the
//! Latin-1 character with the same value.

use crate::error::{ConvertError, Result};
use crate::{binary, hex};
use tracing::trace;

/// Encode text into its byte sequence, one byte per character
pub fn to_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(index, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| {
                trace!(index, code_point = u32::from(ch), "rejecting character");
                ConvertError::invalid_input(format!(
                    "Character {:?} at position {} has code point {} outside 0-255",
                    ch,
                    index,
                    u32::from(ch)
                ))
            })
        })
        .collect()
}

/// Decode a byte sequence into text (Latin-1, infallible)
pub fn from_bytes(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Convert text to a lowercase hex string, two digits per character
pub fn text_to_hex(text: &str) -> Result<String> {
    Ok(hex::encode(&to_bytes(text)?))
}

/// Convert text to one 8-bit string per character
pub fn text_to_binary(text: &str) -> Result<Vec<String>> {
    Ok(binary::encode(&to_bytes(text)?))
}

/// Convert text to its code points
pub fn text_to_decimal(text: &str) -> Result<Vec<u8>> {
    to_bytes(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_to_hex() {
        assert_eq!(
            text_to_hex("Hello, World!").unwrap(),
            "48656c6c6f2c20576f726c6421"
        );
        assert_eq!(text_to_hex("\n").unwrap(), "0a");
        assert_eq!(text_to_hex("").unwrap(), "");
    }

    #[test]
    fn test_text_to_binary_shape() {
        let bits = text_to_binary("Hi!").unwrap();
        assert_eq!(bits, vec!["01001000", "01101001", "00100001"]);
        assert!(bits.iter().all(|b| b.len() == 8));
    }

    #[test]
    fn test_text_to_decimal_keeps_whitespace() {
        assert_eq!(text_to_decimal("a b\n").unwrap(), vec![97, 32, 98, 10]);
    }

    #[test]
    fn test_latin1_upper_half() {
        assert_eq!(text_to_decimal("ÿé").unwrap(), vec![255, 233]);
        assert_eq!(from_bytes(&[255, 233]), "ÿé");
    }

    #[test]
    fn test_rejects_wide_characters() {
        let err = text_to_hex("aĀ").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("256"));

        assert!(text_to_binary("€").is_err());
        assert!(text_to_decimal("日本").is_err());
    }
}
