//! Radix parsing with bit-pattern semantics for non-decimal bases.

use crate::ConvertError;

/// Converts a string in the given base (2–36) to a 32-bit signed integer.
///
/// Base 10 parses an ordinary signed decimal. Every other base parses the
/// digits as an unsigned 32-bit pattern and reinterprets it as `i32`, so
/// `"FFFFFFFF"` in base 16 yields `-1`. Base 16 additionally accepts a
/// `0x`/`0X` prefix. Digits beyond 9 are case-insensitive letters.
///
/// # Errors
///
/// [`ConvertError::InvalidBase`] for a base outside 2–36,
/// [`ConvertError::InvalidDigit`] for an empty body or a character that is
/// not a digit of the base, [`ConvertError::OutOfRange`] when the value
/// does not fit 32 bits.
///
/// # Example
///
/// ```
/// use tinyrt_convert::to_i32_radix;
///
/// assert_eq!(to_i32_radix("0xFF", 16).unwrap(), 255);
/// assert_eq!(to_i32_radix("101", 2).unwrap(), 5);
/// assert_eq!(to_i32_radix("-42", 10).unwrap(), -42);
/// assert_eq!(to_i32_radix("FFFFFFFF", 16).unwrap(), -1);
/// ```
pub fn to_i32_radix(value: &str, from_base: u32) -> Result<i32, ConvertError> {
    if !(2..=36).contains(&from_base) {
        return Err(ConvertError::InvalidBase);
    }
    if from_base == 10 {
        return crate::to_i32(value);
    }

    let mut digits = value.trim_matches(|c: char| c.is_ascii_whitespace());
    if from_base == 16 {
        if let Some(stripped) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
            digits = stripped;
        }
    }
    if digits.is_empty() {
        return Err(ConvertError::InvalidDigit);
    }

    let mut pattern: u32 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(from_base).ok_or(ConvertError::InvalidDigit)?;
        pattern = pattern
            .checked_mul(from_base)
            .and_then(|p| p.checked_add(digit))
            .ok_or(ConvertError::OutOfRange)?;
    }
    Ok(pattern as i32)
}
