//! Base64 encoding and decoding for the tinyrt runtime support library.
//!
//! This crate provides the binary-to-text codec used across the runtime:
//! - encoding with standard `=` padding and an optional 76-column CRLF
//!   line-break mode
//! - strict decoding (exact quartets, trailing-only padding, no characters
//!   outside the alphabet)
//! - offset/length windows over both directions
//!
//! Decoding additionally accepts `!` for `+` and `*` for `/`, so both
//! textual forms of the two symbol positions round-trip to identical bytes;
//! the encoder only ever emits the canonical `+` and `/`.
//!
//! # Example
//!
//! ```
//! use tinyrt_base64::{from_base64, to_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

use thiserror::Error;

mod constants;
mod from_base64;
mod line_breaks;
mod to_base64;

pub use constants::{ALIAS_62, ALIAS_63, ALPHABET, ALPHABET_BYTES, PAD};
pub use from_base64::{decoded_length, from_base64, from_base64_slice};
pub use line_breaks::LineBreaks;
pub use to_base64::{encoded_length, to_base64, to_base64_format, to_base64_slice};

/// Error type for base64 operations.
///
/// [`OutOfBounds`](Base64Error::OutOfBounds) reports a bad argument (a
/// window that does not fit the input); the remaining variants report
/// format violations found while decoding.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Base64Error {
    /// The requested window exceeds the input buffer.
    #[error("OUT_OF_BOUNDS")]
    OutOfBounds,
    /// The encoded length is not a multiple of 4.
    #[error("Base64 length must be a multiple of 4")]
    InvalidLength,
    /// A padding character appeared outside the final one or two positions.
    #[error("INVALID_PADDING")]
    InvalidPadding,
    /// A character outside the base64 alphabet and its accepted aliases.
    #[error("INVALID_CHARACTER")]
    InvalidCharacter,
}
