//! String → floating-point conversion.

use crate::ConvertError;

/// Converts a decimal or scientific-notation string to an `f64`.
///
/// # Example
///
/// ```
/// use tinyrt_convert::to_f64;
///
/// assert_eq!(to_f64("3.25").unwrap(), 3.25);
/// assert_eq!(to_f64(" -1e3 ").unwrap(), -1000.0);
/// assert!(to_f64("abc").is_err());
/// ```
pub fn to_f64(value: &str) -> Result<f64, ConvertError> {
    value
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidDigit)
}
