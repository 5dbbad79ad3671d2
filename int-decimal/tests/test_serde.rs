#![cfg(feature = "with-serde")]

use int_decimal::{convert_to_slice, Buffer, Error, Width};

#[test]
fn test_serialize_buffer() {
    let mut buf = Buffer::new();
    buf.format(-300i16);
    assert_eq!(serde_json::to_string(&buf).unwrap(), "\"-300\"");
}

#[test]
fn test_width_serde() {
    let json = serde_json::to_string(&Width::U32).unwrap();
    assert_eq!(json, "\"U32\"");
    let width: Width = serde_json::from_str(&json).unwrap();
    assert_eq!(width, Width::U32);
}

#[test]
fn test_error_serde() {
    let mut buf = [0u8; 2];
    let err = convert_to_slice(100u8, &mut buf).unwrap_err();
    let json = serde_json::to_string(&err).unwrap();
    let back: Error = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
}
