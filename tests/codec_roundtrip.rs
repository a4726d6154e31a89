//! UTF-8 <-> UTF-16 conversion properties.

use proptest::prelude::*;
use wide_fs::codec::{CodecError, to_utf8, to_wide, trim_nul};
use wide_fs::Heap;

proptest! {
    #[test]
    fn utf8_round_trips_through_wide(s in "[^\\x00]*") {
        let wide = to_wide(&Heap, &s).unwrap();
        prop_assert_eq!(wide.last(), Some(&0));
        prop_assert_eq!(wide.len(), s.encode_utf16().count() + 1);
        let back = to_utf8(&Heap, trim_nul(&wide)).unwrap();
        prop_assert_eq!(back, s);
    }
}

#[test]
fn empty_string_round_trips() {
    let wide = to_wide(&Heap, "").unwrap();
    assert_eq!(&*wide, &[0]);
    assert_eq!(to_utf8(&Heap, trim_nul(&wide)).unwrap(), "");
}

#[test]
fn astral_characters_use_surrogate_pairs() {
    let wide = to_wide(&Heap, "😀").unwrap();
    assert_eq!(&*wide, &[0xD83D, 0xDE00, 0]);
}

#[test]
fn lone_surrogates_are_rejected() {
    assert!(matches!(to_utf8(&Heap, &[0xDC00]), Err(CodecError::Conversion { .. })));
    assert!(matches!(to_utf8(&Heap, &[0x41, 0xD83D]), Err(CodecError::Conversion { .. })));
}
