//! String → integer conversions with per-type range enforcement.

use crate::ConvertError;

/// Trims ASCII whitespace and splits an optional leading sign from the
/// digit run, rejecting empty or non-decimal bodies.
fn split_number(value: &str) -> Result<(bool, &str), ConvertError> {
    let trimmed = value.trim_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::InvalidDigit);
    }
    Ok((negative, digits))
}

/// Parses a signed decimal into the range `min..=max`.
///
/// The magnitude is accumulated unsigned so `min` may be the full
/// `i64::MIN`, whose absolute value has no signed representation.
fn parse_signed(value: &str, min: i64, max: i64) -> Result<i64, ConvertError> {
    let (negative, digits) = split_number(value)?;
    let mut magnitude: u64 = 0;
    for b in digits.bytes() {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add((b - b'0') as u64))
            .ok_or(ConvertError::OutOfRange)?;
    }
    if negative {
        if magnitude > min.unsigned_abs() {
            return Err(ConvertError::OutOfRange);
        }
        Ok((magnitude as i64).wrapping_neg())
    } else {
        if magnitude > max as u64 {
            return Err(ConvertError::OutOfRange);
        }
        Ok(magnitude as i64)
    }
}

/// Parses an unsigned decimal into the range `0..=max`. A minus sign is an
/// invalid digit for unsigned targets, not a range violation.
fn parse_unsigned(value: &str, max: u64) -> Result<u64, ConvertError> {
    let (negative, digits) = split_number(value)?;
    if negative {
        return Err(ConvertError::InvalidDigit);
    }
    let mut parsed: u64 = 0;
    for b in digits.bytes() {
        parsed = parsed
            .checked_mul(10)
            .and_then(|m| m.checked_add((b - b'0') as u64))
            .ok_or(ConvertError::OutOfRange)?;
    }
    if parsed > max {
        return Err(ConvertError::OutOfRange);
    }
    Ok(parsed)
}

/// Converts a decimal string to an 8-bit signed integer.
///
/// # Example
///
/// ```
/// use tinyrt_convert::to_i8;
///
/// assert_eq!(to_i8("-128").unwrap(), -128);
/// assert!(to_i8("128").is_err());
/// ```
pub fn to_i8(value: &str) -> Result<i8, ConvertError> {
    Ok(parse_signed(value, i8::MIN as i64, i8::MAX as i64)? as i8)
}

/// Converts a decimal string to an 8-bit unsigned integer.
pub fn to_u8(value: &str) -> Result<u8, ConvertError> {
    Ok(parse_unsigned(value, u8::MAX as u64)? as u8)
}

/// Converts a decimal string to a 16-bit signed integer.
pub fn to_i16(value: &str) -> Result<i16, ConvertError> {
    Ok(parse_signed(value, i16::MIN as i64, i16::MAX as i64)? as i16)
}

/// Converts a decimal string to a 16-bit unsigned integer.
pub fn to_u16(value: &str) -> Result<u16, ConvertError> {
    Ok(parse_unsigned(value, u16::MAX as u64)? as u16)
}

/// Converts a decimal string to a 32-bit signed integer.
pub fn to_i32(value: &str) -> Result<i32, ConvertError> {
    Ok(parse_signed(value, i32::MIN as i64, i32::MAX as i64)? as i32)
}

/// Converts a decimal string to a 32-bit unsigned integer.
pub fn to_u32(value: &str) -> Result<u32, ConvertError> {
    Ok(parse_unsigned(value, u32::MAX as u64)? as u32)
}

/// Converts a decimal string to a 64-bit signed integer.
pub fn to_i64(value: &str) -> Result<i64, ConvertError> {
    parse_signed(value, i64::MIN, i64::MAX)
}

/// Converts a decimal string to a 64-bit unsigned integer.
pub fn to_u64(value: &str) -> Result<u64, ConvertError> {
    parse_unsigned(value, u64::MAX)
}
