//! Property tests for the UTF-8 / wide text codec.

use numbertext::{WideText, codec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn valid_text_round_trips(text in any::<String>()) {
        let wide = codec::to_wide(text.as_bytes()).unwrap();
        prop_assert_eq!(wide.len(), text.chars().count());
        prop_assert_eq!(codec::to_bytes(&wide), text);
    }

    #[test]
    fn arbitrary_bytes_decode_or_report_offset(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        match codec::to_wide(&bytes) {
            Ok(wide) => prop_assert_eq!(codec::to_bytes(&wide).into_bytes(), bytes),
            Err(err) => {
                prop_assert!(err.valid_up_to() < bytes.len());
                prop_assert!(std::str::from_utf8(&bytes[..err.valid_up_to()]).is_ok());
            }
        }
    }

    #[test]
    fn wide_text_display_matches_source(text in "\\PC*") {
        prop_assert_eq!(WideText::from(text.as_str()).to_string(), text);
    }
}
