//! Conversion sub-commands
//!
//! One sub-command per engine operation. Each handler gathers its input,
//! calls the engine and wraps the result in an [`Output`].

use crate::output::Output;
use clap::{Args, Subcommand};
use ctf_convert::{Converter, Result};
use std::path::PathBuf;
use tracing::debug;

/// A single string input, given inline or read from a file
#[derive(Args, Debug, Clone)]
pub struct Input {
    /// Input value
    #[arg(required_unless_present = "file")]
    pub value: Option<String>,

    /// Read the input from a file instead
    #[arg(short, long, conflicts_with = "value")]
    pub file: Option<PathBuf>,
}

impl Input {
    /// Resolve to text; surrounding line breaks of file input are dropped
    fn text(&self, conv: &Converter) -> Result<String> {
        match (&self.value, &self.file) {
            (_, Some(path)) => {
                let data = conv.load_data(path)?;
                Ok(data.trim_matches(|c| c == '\n' || c == '\r').to_string())
            },
            (Some(value), None) => Ok(value.clone()),
            (None, None) => Ok(String::new()),
        }
    }

    /// Resolve to a hex string; all surrounding whitespace is dropped
    fn hex(&self, conv: &Converter) -> Result<String> {
        Ok(self.text(conv)?.trim().to_string())
    }
}

/// One or more 8-bit strings, as separate arguments or space-separated
#[derive(Args, Debug, Clone)]
pub struct BitsInput {
    /// Binary bytes, e.g. `01001000 01101001`
    #[arg(required = true, num_args = 1..)]
    pub bits: Vec<String>,
}

impl BitsInput {
    fn entries(&self) -> Vec<&str> {
        self.bits.iter().flat_map(|b| b.split_whitespace()).collect()
    }
}

/// A list of decimal values, as separate arguments or comma-separated
#[derive(Args, Debug, Clone)]
pub struct DecimalInput {
    /// Decimal values (0-255)
    #[arg(required = true, num_args = 1.., value_delimiter = ',', allow_negative_numbers = true)]
    pub values: Vec<i64>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConvertCommands {
    /// Text to lowercase hex
    TextToHex(Input),
    /// Text to 8-bit binary strings
    TextToBinary(Input),
    /// Text to decimal code points
    TextToDecimal(Input),

    /// Hex to text
    HexToText(Input),
    /// Hex to decimal byte values
    HexToDecimal(Input),
    /// Hex to 8-bit binary strings
    HexToBinary(Input),
    /// Parse a whole hex string as one number
    HexToInteger(Input),

    /// Binary strings to text
    BinaryToText(BitsInput),
    /// Binary strings to decimal values
    BinaryToDecimal(BitsInput),
    /// Binary strings to hex
    BinaryToHex(BitsInput),

    /// Decimal values to text
    DecimalToText(DecimalInput),
    /// Decimal values to hex
    DecimalToHex(DecimalInput),
    /// Decimal values to 8-bit binary strings
    DecimalToBinary(DecimalInput),
    /// Format one number as hex (no 0-255 limit)
    IntegerToHex {
        /// Value to format
        value: u128,
    },

    /// XOR two texts, repeating the shorter one
    XorText {
        /// First operand
        a: String,
        /// Second operand (key)
        b: String,
    },
    /// XOR two comma-separated decimal lists, repeating the shorter one
    XorDecimal {
        /// First operand, e.g. `115,101,99`
        #[arg(value_delimiter = ',', allow_negative_numbers = true)]
        a: Vec<i64>,
        /// Second operand (key), e.g. `107`
        #[arg(long = "key", short = 'k', value_delimiter = ',', allow_negative_numbers = true, required = true)]
        b: Vec<i64>,
    },
}

impl ConvertCommands {
    /// Run the conversion against the engine
    pub fn run(&self, conv: &Converter) -> Result<Output> {
        debug!(command = ?self, "running conversion");

        let output = match self {
            Self::TextToHex(input) => Output::Text(conv.text_to_hex(&input.text(conv)?)?),
            Self::TextToBinary(input) => Output::Bits(conv.text_to_binary(&input.text(conv)?)?),
            Self::TextToDecimal(input) => {
                Output::Bytes(conv.text_to_decimal(&input.text(conv)?)?)
            },

            Self::HexToText(input) => Output::Text(conv.hex_to_text(&input.hex(conv)?)?),
            Self::HexToDecimal(input) => Output::Bytes(conv.hex_to_decimal(&input.hex(conv)?)?),
            Self::HexToBinary(input) => Output::Bits(conv.hex_to_binary(&input.hex(conv)?)?),
            Self::HexToInteger(input) => Output::Integer(conv.hex_to_integer(&input.hex(conv)?)?),

            Self::BinaryToText(input) => Output::Text(conv.binary_to_text(&input.entries())?),
            Self::BinaryToDecimal(input) => {
                Output::Bytes(conv.binary_to_decimal(&input.entries())?)
            },
            Self::BinaryToHex(input) => Output::Text(conv.binary_to_hex(&input.entries())?),

            Self::DecimalToText(input) => Output::Text(conv.decimal_to_text(&input.values)?),
            Self::DecimalToHex(input) => Output::Text(conv.decimal_to_hex(&input.values)?),
            Self::DecimalToBinary(input) => Output::Bits(conv.decimal_to_binary(&input.values)?),
            Self::IntegerToHex { value } => Output::Text(conv.integer_to_hex(*value)),

            Self::XorText { a, b } => Output::Text(conv.xor_text(a, b)?),
            Self::XorDecimal { a, b } => Output::Bytes(conv.xor_decimal(a, b)?),
        };
        Ok(output)
    }
}
