//! Line-wrapped output formatting.

use std::str;

/// Number of encoded characters between line breaks.
pub(crate) const LINE_WIDTH: usize = 76;

/// Separator inserted between lines.
pub(crate) const LINE_SEPARATOR: &str = "\r\n";

/// Line-break mode for encoded output.
///
/// Wrapping is applied to the finished encoding as a post-processing step;
/// it never changes grouping or padding, and stripping the separators yields
/// exactly the single-line form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreaks {
    /// Single-line output.
    #[default]
    None,
    /// Insert a CRLF after every 76 output characters, the MIME convention.
    Insert76,
}

/// Splits `encoded` into 76-character chunks joined by CRLF.
///
/// No trailing separator is appended; input no longer than one line is
/// returned unchanged.
pub(crate) fn insert_line_breaks(encoded: &str) -> String {
    if encoded.len() <= LINE_WIDTH {
        return encoded.to_string();
    }
    let lines = encoded.len().div_ceil(LINE_WIDTH);
    let mut out = String::with_capacity(encoded.len() + (lines - 1) * LINE_SEPARATOR.len());
    // Encoded output is pure ASCII, so byte chunks stay valid UTF-8.
    for (i, chunk) in encoded.as_bytes().chunks(LINE_WIDTH).enumerate() {
        if i > 0 {
            out.push_str(LINE_SEPARATOR);
        }
        out.push_str(str::from_utf8(chunk).unwrap_or(""));
    }
    out
}
