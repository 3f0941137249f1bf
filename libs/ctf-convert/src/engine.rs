//! Conversion engine entry point

use crate::error::Result;
use crate::{binary, decimal, hex, loader, text, xor};
use std::path::Path;

/// Stateless conversion engine
///
/// Groups every conversion behind one value. It holds no state, so a
/// single instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct Converter;

impl Converter {
    pub fn new() -> Self {
        Self
    }

    pub fn load_data(&self, path: impl AsRef<Path>) -> Result<String> {
        loader::load_data(path)
    }

    // ===== From text =====

    pub fn text_to_hex(&self, text: &str) -> Result<String> {
        text::text_to_hex(text)
    }

    pub fn text_to_binary(&self, text: &str) -> Result<Vec<String>> {
        text::text_to_binary(text)
    }

    pub fn text_to_decimal(&self, text: &str) -> Result<Vec<u8>> {
        text::text_to_decimal(text)
    }

    // ===== From hex =====

    pub fn hex_to_text(&self, hex: &str) -> Result<String> {
        hex::hex_to_text(hex)
    }

    pub fn hex_to_decimal(&self, hex: &str) -> Result<Vec<u8>> {
        hex::hex_to_decimal(hex)
    }

    pub fn hex_to_binary(&self, hex: &str) -> Result<Vec<String>> {
        hex::hex_to_binary(hex)
    }

    /// Parse the whole hex string as one number
    pub fn hex_to_integer(&self, hex: &str) -> Result<u128> {
        hex::hex_to_integer(hex)
    }

    // ===== From binary =====

    pub fn binary_to_text<S: AsRef<str>>(&self, bits: &[S]) -> Result<String> {
        binary::binary_to_text(bits)
    }

    pub fn binary_to_decimal<S: AsRef<str>>(&self, bits: &[S]) -> Result<Vec<u8>> {
        binary::binary_to_decimal(bits)
    }

    pub fn binary_to_hex<S: AsRef<str>>(&self, bits: &[S]) -> Result<String> {
        binary::binary_to_hex(bits)
    }

    // ===== From decimal =====

    pub fn decimal_to_text(&self, values: &[i64]) -> Result<String> {
        decimal::decimal_to_text(values)
    }

    pub fn decimal_to_hex(&self, values: &[i64]) -> Result<String> {
        decimal::decimal_to_hex(values)
    }

    pub fn decimal_to_binary(&self, values: &[i64]) -> Result<Vec<String>> {
        decimal::decimal_to_binary(values)
    }

    /// Format one number as hex, without the 0-255 restriction
    pub fn integer_to_hex(&self, value: u128) -> String {
        hex::integer_to_hex(value)
    }

    // ===== XOR =====

    pub fn xor_text(&self, a: &str, b: &str) -> Result<String> {
        xor::xor_text(a, b)
    }

    pub fn xor_decimal(&self, a: &[i64], b: &[i64]) -> Result<Vec<u8>> {
        xor::xor_decimal(a, b)
    }

    pub fn xor_bytes(&self, a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
        xor::xor_bytes(a, b)
    }
}
