//! Alphabet and lookup tables shared by the encoder and decoder.

/// Canonical base64 alphabet, sextet value → character.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Canonical alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: char = '=';

/// Alternate character accepted for sextet value 62 when decoding (`+` is canonical).
pub const ALIAS_62: char = '!';

/// Alternate character accepted for sextet value 63 when decoding (`/` is canonical).
pub const ALIAS_63: char = '*';

pub(crate) const PAD_BYTE: u8 = b'=';

/// Marker for code units that are not base64 digits.
pub(crate) const INVALID: i8 = -1;

/// Reverse lookup table: code unit → sextet value, [`INVALID`] elsewhere.
///
/// Both members of each symbol pair are populated (`+` and `!` → 62,
/// `/` and `*` → 63), so the two textual forms decode to identical bytes
/// without any conditional branching. The padding character stays
/// [`INVALID`]; it is recognized positionally by the decoder.
pub(crate) static DECODE_TABLE: [i8; 256] = {
    let mut table = [INVALID; 256];
    let mut value = 0;
    while value < 64 {
        table[ALPHABET_BYTES[value] as usize] = value as i8;
        value += 1;
    }
    table[ALIAS_62 as usize] = 62;
    table[ALIAS_63 as usize] = 63;
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_is_64_unique_characters() {
        assert_eq!(ALPHABET.len(), 64);
        for &c in ALPHABET_BYTES.iter() {
            assert_eq!(ALPHABET_BYTES.iter().filter(|&&o| o == c).count(), 1);
        }
        assert_eq!(ALPHABET.as_bytes(), ALPHABET_BYTES);
    }

    #[test]
    fn decode_table_inverts_the_alphabet() {
        for (value, &c) in ALPHABET_BYTES.iter().enumerate() {
            assert_eq!(DECODE_TABLE[c as usize], value as i8);
        }
    }

    #[test]
    fn decode_table_accepts_both_symbol_forms() {
        assert_eq!(DECODE_TABLE[b'+' as usize], 62);
        assert_eq!(DECODE_TABLE[b'!' as usize], 62);
        assert_eq!(DECODE_TABLE[b'/' as usize], 63);
        assert_eq!(DECODE_TABLE[b'*' as usize], 63);
    }

    #[test]
    fn padding_is_not_a_digit() {
        assert_eq!(DECODE_TABLE[PAD_BYTE as usize], INVALID);
    }

    #[test]
    fn high_code_units_are_invalid() {
        for unit in 128..=255usize {
            assert_eq!(DECODE_TABLE[unit], INVALID);
        }
    }
}
