//! Result rendering for the CLI

use crate::config::OutputConfig;
use serde::Serialize;

/// A conversion result ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Text or hex string, printed verbatim
    Text(String),
    /// Decimal byte values
    Bytes(Vec<u8>),
    /// 8-bit binary strings
    Bits(Vec<String>),
    /// Single integer (hex-to-integer)
    Integer(u128),
}

impl Output {
    /// Render for stdout according to the output settings
    pub fn render(&self, config: &OutputConfig) -> serde_json::Result<String> {
        if config.json {
            return self.to_json();
        }

        let rendered = match self {
            Output::Text(s) => s.clone(),
            Output::Bytes(values) => values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(&config.separator),
            Output::Bits(bits) => bits.join(&config.separator),
            Output::Integer(value) => value.to_string(),
        };
        Ok(rendered)
    }

    fn to_json(&self) -> serde_json::Result<String> {
        match self {
            // u128 is outside serde_json's default number range
            Output::Integer(value) => Ok(value.to_string()),
            other => serde_json::to_string(other),
        }
    }
}
