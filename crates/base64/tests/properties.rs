//! Property tests for the codec laws.

use proptest::prelude::*;
use tinyrt_base64::{
    decoded_length, encoded_length, from_base64, to_base64, to_base64_format, Base64Error,
    LineBreaks,
};

proptest! {
    #[test]
    fn round_trip(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = to_base64(&blob);
        prop_assert_eq!(from_base64(&encoded).unwrap(), blob);
    }

    #[test]
    fn length_law(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = to_base64(&blob);
        prop_assert_eq!(encoded.len() % 4, 0);
        prop_assert_eq!(encoded.len(), blob.len().div_ceil(3) * 4);
        prop_assert_eq!(encoded.len(), encoded_length(blob.len()));
    }

    #[test]
    fn padding_law(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = to_base64(&blob);
        let pads = encoded.chars().rev().take_while(|&c| c == '=').count();
        let expected = match blob.len() % 3 {
            0 => 0,
            1 => 2,
            _ => 1,
        };
        prop_assert_eq!(pads, expected);
    }

    #[test]
    fn non_quartet_lengths_always_fail(text in "[A-Za-z0-9+/=]{1,64}") {
        if text.len() % 4 != 0 {
            prop_assert_eq!(from_base64(&text), Err(Base64Error::InvalidLength));
            prop_assert_eq!(
                decoded_length(text.as_bytes()),
                Err(Base64Error::InvalidLength)
            );
        }
    }

    #[test]
    fn wrapping_is_reversible(blob in proptest::collection::vec(any::<u8>(), 0..512)) {
        let wrapped = to_base64_format(&blob, LineBreaks::Insert76);
        for line in wrapped.split("\r\n") {
            prop_assert!(line.len() <= 76);
        }
        prop_assert_eq!(wrapped.replace("\r\n", ""), to_base64(&blob));
    }
}
