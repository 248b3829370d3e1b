//! Code-unit → character conversion.

use crate::ConvertError;

/// Converts a 16-bit code unit to its Unicode character.
///
/// # Errors
///
/// [`ConvertError::InvalidCodeUnit`] for the surrogate range
/// `0xD800..=0xDFFF`, which names no scalar value.
///
/// # Example
///
/// ```
/// use tinyrt_convert::to_char;
///
/// assert_eq!(to_char(0x41).unwrap(), 'A');
/// assert_eq!(to_char(0x20AC).unwrap(), '€');
/// assert!(to_char(0xD800).is_err());
/// ```
pub fn to_char(value: u16) -> Result<char, ConvertError> {
    char::from_u32(value as u32).ok_or(ConvertError::InvalidCodeUnit)
}
