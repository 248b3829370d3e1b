//! Base64 decoding with strict format validation.

use crate::constants::{DECODE_TABLE, PAD_BYTE};
use crate::Base64Error;

/// Decodes a base64 string to bytes.
///
/// The input must be well formed: a length that is a multiple of 4, padding
/// only in the final one or two positions, and no characters outside the
/// alphabet. The alternate symbol forms `!` (for `+`) and `*` (for `/`) are
/// accepted.
///
/// # Errors
///
/// [`Base64Error::InvalidLength`] when the length is not a multiple of 4,
/// [`Base64Error::InvalidPadding`] when `=` appears outside the trailing
/// positions, and [`Base64Error::InvalidCharacter`] for anything not in the
/// alphabet. The whole call fails; no partial output is produced.
///
/// # Example
///
/// ```
/// use tinyrt_base64::from_base64;
///
/// assert_eq!(from_base64("Zm9vYmFy").unwrap(), b"foobar");
/// assert_eq!(from_base64("Zg==").unwrap(), b"f");
/// assert_eq!(from_base64("").unwrap(), b"");
/// assert!(from_base64("Zg=").is_err());
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode_window(encoded.as_bytes())
}

/// Decodes `length` bytes of `encoded` starting at `offset`.
///
/// The window is taken over the text's UTF-8 bytes; base64 text is ASCII,
/// so a window that cuts a multi-byte character simply fails validation.
///
/// # Errors
///
/// [`Base64Error::OutOfBounds`] when `offset + length` exceeds the text,
/// otherwise as [`from_base64`].
///
/// # Example
///
/// ```
/// use tinyrt_base64::from_base64_slice;
///
/// let text = "xxxxZm9vYmFy";
/// assert_eq!(from_base64_slice(text, 4, 8).unwrap(), b"foobar");
/// ```
pub fn from_base64_slice(
    encoded: &str,
    offset: usize,
    length: usize,
) -> Result<Vec<u8>, Base64Error> {
    let bytes = encoded.as_bytes();
    let end = offset.checked_add(length).ok_or(Base64Error::OutOfBounds)?;
    if end > bytes.len() {
        return Err(Base64Error::OutOfBounds);
    }
    decode_window(&bytes[offset..end])
}

/// Returns the number of bytes a well-formed window decodes to:
/// `3 * (len / 4)` minus the trailing padding count.
///
/// # Errors
///
/// [`Base64Error::InvalidLength`] when the length is not a multiple of 4.
///
/// # Example
///
/// ```
/// use tinyrt_base64::decoded_length;
///
/// assert_eq!(decoded_length(b"Zm9vYmFy").unwrap(), 6);
/// assert_eq!(decoded_length(b"Zg==").unwrap(), 1);
/// assert_eq!(decoded_length(b"").unwrap(), 0);
/// assert!(decoded_length(b"Zg=").is_err());
/// ```
pub fn decoded_length(encoded: &[u8]) -> Result<usize, Base64Error> {
    if encoded.is_empty() {
        return Ok(0);
    }
    if encoded.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength);
    }
    Ok(encoded.len() / 4 * 3 - trailing_padding(encoded))
}

/// Counts trailing `=` in the final quartet (0, 1 or 2).
///
/// The caller guarantees a non-empty window whose length is a multiple of 4.
fn trailing_padding(view: &[u8]) -> usize {
    let len = view.len();
    if view[len - 1] != PAD_BYTE {
        0
    } else if view[len - 2] == PAD_BYTE {
        2
    } else {
        1
    }
}

/// Looks up the sextet value of one code unit.
#[inline]
fn sextet(code: u8) -> Result<u8, Base64Error> {
    let value = DECODE_TABLE[code as usize];
    if value < 0 {
        // '=' is never a digit; seeing it here means it sits outside the
        // legal trailing positions.
        if code == PAD_BYTE {
            return Err(Base64Error::InvalidPadding);
        }
        return Err(Base64Error::InvalidCharacter);
    }
    Ok(value as u8)
}

fn decode_window(view: &[u8]) -> Result<Vec<u8>, Base64Error> {
    if view.is_empty() {
        return Ok(Vec::new());
    }

    let out_len = decoded_length(view)?;
    let padding = view.len() / 4 * 3 - out_len;
    let mut out = Vec::with_capacity(out_len);

    // Quartets are independent, so a single forward pass suffices. The
    // final quartet is split off only when it carries padding.
    let main_end = if padding > 0 {
        view.len() - 4
    } else {
        view.len()
    };

    let mut i = 0;
    while i < main_end {
        let s0 = sextet(view[i])?;
        let s1 = sextet(view[i + 1])?;
        let s2 = sextet(view[i + 2])?;
        let s3 = sextet(view[i + 3])?;
        out.push((s0 << 2) | (s1 >> 4));
        out.push((s1 << 4) | (s2 >> 2));
        out.push((s2 << 6) | s3);
        i += 4;
    }

    match padding {
        1 => {
            let s0 = sextet(view[main_end])?;
            let s1 = sextet(view[main_end + 1])?;
            let s2 = sextet(view[main_end + 2])?;
            out.push((s0 << 2) | (s1 >> 4));
            out.push((s1 << 4) | (s2 >> 2));
        }
        2 => {
            let s0 = sextet(view[main_end])?;
            let s1 = sextet(view[main_end + 1])?;
            out.push((s0 << 2) | (s1 >> 4));
        }
        _ => {}
    }

    Ok(out)
}
