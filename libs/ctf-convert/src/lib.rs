//! ctf-convert - Conversion engine for CTF workflows
//!
//! Converts between text, decimal code points, hexadecimal strings and
//! 8-bit binary strings, and XORs byte sequences with a cyclically
//! repeated key.
//!
//! All representations are projections of one byte sequence, restricted
//! to the single-byte range: text characters must have code points 0-255
//! and decode as Latin-1.
//!
//! # Example
//!
//! ```rust
//! use ctf_convert::Converter;
//!
//! let conv = Converter::new();
//!
//! assert_eq!(conv.text_to_hex("Hello").unwrap(), "48656c6c6f");
//! assert_eq!(conv.hex_to_text("0x48656c6c6f").unwrap(), "Hello");
//! assert_eq!(conv.decimal_to_binary(&[72]).unwrap(), vec!["01001000"]);
//!
//! // Cyclic XOR with a single-byte key
//! let cipher = conv.xor_text("Hello", "K").unwrap();
//! assert_eq!(conv.xor_text(&cipher, "K").unwrap(), "Hello");
//!
//! // Validation failures are reported, never corrected
//! assert!(conv.hex_to_text("abc").is_err());
//! assert!(conv.decimal_to_hex(&[256]).is_err());
//! ```
//!
//! # Operations
//!
//! | From \ To | text | decimal | hex | binary |
//! |-----------|------|---------|-----|--------|
//! | text | - | `text_to_decimal` | `text_to_hex` | `text_to_binary` |
//! | decimal | `decimal_to_text` | - | `decimal_to_hex` | `decimal_to_binary` |
//! | hex | `hex_to_text` | `hex_to_decimal` | - | `hex_to_binary` |
//! | binary | `binary_to_text` | `binary_to_decimal` | `binary_to_hex` | - |
//!
//! Plus `xor_text`, `xor_decimal`, `xor_bytes`, the single-value
//! `integer_to_hex` / `hex_to_integer`, and `load_data` for file input.

pub mod binary;
pub mod decimal;
pub mod engine;
pub mod error;
pub mod hex;
pub mod loader;
pub mod text;
pub mod xor;

// Re-exports for convenience
pub use engine::Converter;
pub use error::{ConvertError, Result};
pub use loader::load_data;

pub use binary::{binary_to_decimal, binary_to_hex, binary_to_text};
pub use decimal::{decimal_to_binary, decimal_to_hex, decimal_to_text};
pub use hex::{hex_to_binary, hex_to_decimal, hex_to_integer, hex_to_text, integer_to_hex};
pub use text::{text_to_binary, text_to_decimal, text_to_hex};
pub use xor::{xor_bytes, xor_decimal, xor_text};
