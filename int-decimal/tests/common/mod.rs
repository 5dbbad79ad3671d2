#![allow(dead_code)]

use std::fmt::Display;

use int_decimal::{convert, Integer, SliceCursor, BUFFER_LEN};

/// Converts through a checked slice cursor and returns the text written.
pub fn render<I: Integer>(n: I) -> String {
    let mut buf = [0u8; BUFFER_LEN];
    let written = convert(n, SliceCursor::new(&mut buf)).finish().unwrap();
    String::from_utf8(written.to_vec()).unwrap()
}

/// Asserts that the conversion agrees byte for byte with `core::fmt`.
pub fn assert_matches_reference<I: Integer + Display>(n: I) {
    let expected = n.to_string();
    let actual = render(n);
    assert_eq!(expected, actual, "converting {}", expected);
}

/// Asserts the shape of a conversion: optional '-', then digits with no leading zero.
pub fn assert_canonical(s: &str, negative: bool) {
    let digits = match s.strip_prefix('-') {
        Some(rest) => {
            assert!(negative, "unexpected sign in {:?}", s);
            rest
        }
        None => {
            assert!(!negative, "missing sign in {:?}", s);
            s
        }
    };
    assert!(!digits.is_empty());
    assert!(digits.bytes().all(|b| b.is_ascii_digit()), "{:?}", s);
    assert!(digits == "0" || !digits.starts_with('0'), "leading zero in {:?}", s);
    assert!(!s.starts_with('+'));
}
