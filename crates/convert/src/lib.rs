//! Numeric and string conversions for the tinyrt runtime support library.
//!
//! String → number parsing with per-type range enforcement, radix parsing
//! (2–36) with bit-pattern semantics for non-decimal bases, and code-unit →
//! `char` conversion. Leading and trailing ASCII whitespace is accepted
//! everywhere; a leading `+` is accepted everywhere, a leading `-` only for
//! signed targets.
//!
//! # Example
//!
//! ```
//! use tinyrt_convert::{to_i32, to_i32_radix, to_u8};
//!
//! assert_eq!(to_u8(" 200 ").unwrap(), 200);
//! assert_eq!(to_i32("-42").unwrap(), -42);
//! assert_eq!(to_i32_radix("FFFFFFFF", 16).unwrap(), -1);
//! ```

use thiserror::Error;

mod chars;
mod float;
mod integers;
mod radix;

pub use chars::to_char;
pub use float::to_f64;
pub use integers::{to_i16, to_i32, to_i64, to_i8, to_u16, to_u32, to_u64, to_u8};
pub use radix::to_i32_radix;

/// Error type for conversion operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConvertError {
    /// The input is empty or contains a character that is not a digit of
    /// the requested base (a misplaced sign counts as an invalid digit).
    #[error("INVALID_DIGIT")]
    InvalidDigit,
    /// The parsed value does not fit the target type.
    #[error("OUT_OF_RANGE")]
    OutOfRange,
    /// The radix is outside 2–36.
    #[error("INVALID_BASE")]
    InvalidBase,
    /// The code unit is a UTF-16 surrogate and names no character.
    #[error("INVALID_CODE_UNIT")]
    InvalidCodeUnit,
}
