//! Base64 encoding.

use crate::constants::{ALPHABET_BYTES, PAD};
use crate::line_breaks::{insert_line_breaks, LineBreaks};
use crate::Base64Error;

/// Pre-computed two-character lookup table: a 12-bit value (two sextets)
/// maps to the pair of characters encoding it.
static PAIRS: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut hi = 0;
    while hi < 64 {
        let mut lo = 0;
        while lo < 64 {
            let idx = hi * 64 + lo;
            table[idx][0] = ALPHABET_BYTES[hi];
            table[idx][1] = ALPHABET_BYTES[lo];
            lo += 1;
        }
        hi += 1;
    }
    table
};

/// Returns the number of characters `len` input bytes encode to:
/// `4 * ceil(len / 3)`. Line breaks are not counted.
///
/// # Example
///
/// ```
/// use tinyrt_base64::encoded_length;
///
/// assert_eq!(encoded_length(0), 0);
/// assert_eq!(encoded_length(1), 4);
/// assert_eq!(encoded_length(3), 4);
/// assert_eq!(encoded_length(4), 8);
/// ```
pub fn encoded_length(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encodes a byte slice to a base64 string with standard padding.
///
/// # Example
///
/// ```
/// use tinyrt_base64::to_base64;
///
/// assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
/// assert_eq!(to_base64(b"f"), "Zg==");
/// assert_eq!(to_base64(b""), "");
/// ```
pub fn to_base64(data: &[u8]) -> String {
    encode_plain(data)
}

/// Encodes a byte slice with a selectable line-break mode.
///
/// [`LineBreaks::Insert76`] wraps the finished encoding at 76 characters
/// with CRLF separators; padding and grouping are unaffected.
///
/// # Example
///
/// ```
/// use tinyrt_base64::{to_base64_format, LineBreaks};
///
/// let data = vec![0u8; 60];
/// let wrapped = to_base64_format(&data, LineBreaks::Insert76);
/// assert_eq!(wrapped.lines().next().unwrap().len(), 76);
/// ```
pub fn to_base64_format(data: &[u8], format: LineBreaks) -> String {
    match format {
        LineBreaks::None => encode_plain(data),
        LineBreaks::Insert76 => insert_line_breaks(&encode_plain(data)),
    }
}

/// Encodes `length` bytes of `data` starting at `offset`.
///
/// # Errors
///
/// Returns [`Base64Error::OutOfBounds`] when `offset + length` exceeds the
/// slice. A zero-length window encodes to the empty string.
///
/// # Example
///
/// ```
/// use tinyrt_base64::{to_base64_slice, LineBreaks};
///
/// let data = b"xxfooxx";
/// let encoded = to_base64_slice(data, 2, 3, LineBreaks::None).unwrap();
/// assert_eq!(encoded, "Zm9v");
/// ```
pub fn to_base64_slice(
    data: &[u8],
    offset: usize,
    length: usize,
    format: LineBreaks,
) -> Result<String, Base64Error> {
    let end = offset.checked_add(length).ok_or(Base64Error::OutOfBounds)?;
    if end > data.len() {
        return Err(Base64Error::OutOfBounds);
    }
    Ok(to_base64_format(&data[offset..end], format))
}

fn encode_plain(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_length(data.len()));
    let tail = data.len() % 3;
    let trios_end = data.len() - tail;

    let mut i = 0;
    while i < trios_end {
        let b0 = data[i];
        let b1 = data[i + 1];
        let b2 = data[i + 2];
        // Two 12-bit halves of the 24-bit group.
        let hi = ((b0 as usize) << 4) | ((b1 as usize) >> 4);
        let lo = (((b1 & 0x0f) as usize) << 8) | (b2 as usize);
        out.push(PAIRS[hi][0] as char);
        out.push(PAIRS[hi][1] as char);
        out.push(PAIRS[lo][0] as char);
        out.push(PAIRS[lo][1] as char);
        i += 3;
    }

    match tail {
        1 => {
            // Missing bytes count as zero; two positions become padding.
            let hi = (data[trios_end] as usize) << 4;
            out.push(PAIRS[hi][0] as char);
            out.push(PAIRS[hi][1] as char);
            out.push(PAD);
            out.push(PAD);
        }
        2 => {
            let b0 = data[trios_end];
            let b1 = data[trios_end + 1];
            let hi = ((b0 as usize) << 4) | ((b1 as usize) >> 4);
            let third = ((b1 & 0x0f) as usize) << 2;
            out.push(PAIRS[hi][0] as char);
            out.push(PAIRS[hi][1] as char);
            out.push(ALPHABET_BYTES[third] as char);
            out.push(PAD);
        }
        _ => {}
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(to_base64(b""), "");
        assert_eq!(to_base64(b"f"), "Zg==");
        assert_eq!(to_base64(b"fo"), "Zm8=");
        assert_eq!(to_base64(b"foo"), "Zm9v");
        assert_eq!(to_base64(b"foob"), "Zm9vYg==");
        assert_eq!(to_base64(b"fooba"), "Zm9vYmE=");
        assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn emits_only_canonical_symbols() {
        // 0xfb 0xff packs to sextets 62, 63, 63 — the symbol positions.
        let encoded = to_base64(&[0xfb, 0xff]);
        assert_eq!(encoded, "+/8=");
        assert!(!encoded.contains('!'));
        assert!(!encoded.contains('*'));
    }

    #[test]
    fn output_length_matches_the_law() {
        for len in 0..64 {
            let data = vec![0xa5u8; len];
            let encoded = to_base64(&data);
            assert_eq!(encoded.len(), encoded_length(len));
            assert_eq!(encoded.len() % 4, 0);
        }
    }

    #[test]
    fn padding_follows_input_remainder() {
        for len in 1..32 {
            let data = vec![7u8; len];
            let encoded = to_base64(&data);
            let pads = encoded.chars().rev().take_while(|&c| c == PAD).count();
            let expected = match len % 3 {
                0 => 0,
                1 => 2,
                _ => 1,
            };
            assert_eq!(pads, expected, "length {}", len);
        }
    }

    #[test]
    fn slice_window() {
        let data = b"..foobar..";
        assert_eq!(
            to_base64_slice(data, 2, 6, LineBreaks::None).unwrap(),
            "Zm9vYmFy"
        );
        assert_eq!(to_base64_slice(data, 4, 0, LineBreaks::None).unwrap(), "");
    }

    #[test]
    fn slice_out_of_bounds() {
        let data = b"abc";
        assert_eq!(
            to_base64_slice(data, 2, 2, LineBreaks::None),
            Err(Base64Error::OutOfBounds)
        );
        assert_eq!(
            to_base64_slice(data, 4, 0, LineBreaks::None),
            Err(Base64Error::OutOfBounds)
        );
        assert_eq!(
            to_base64_slice(data, usize::MAX, 2, LineBreaks::None),
            Err(Base64Error::OutOfBounds)
        );
    }

    #[test]
    fn format_none_equals_plain() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(to_base64_format(&data, LineBreaks::None), to_base64(&data));
    }
}
