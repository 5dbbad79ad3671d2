mod common;

use int_decimal::{
    convert, convert_to_slice, convert_with_terminator, raw, Buffer, ErrorKind, Integer,
    RawCursor, SliceCursor, Sink, BUFFER_LEN, TERMINATOR,
};

use crate::common::render;

/// A sink that only counts, to check that nothing is ever read back or skipped.
#[derive(Default)]
struct Counter {
    puts: usize,
}

impl Sink for Counter {
    fn put(&mut self, _byte: u8) {
        self.puts += 1;
    }
}

#[test]
fn test_one_put_per_character() {
    for (n, len) in [(0i64, 1), (-1, 2), (9, 1), (10, 2), (i64::MIN, 20), (i64::MAX, 19)] {
        assert_eq!(convert(n, Counter::default()).puts, len);
        assert_eq!(convert_with_terminator(n, Counter::default()).puts, len + 1);
    }
}

#[test]
fn test_terminator() {
    let values: &[i64] = &[0, -1, 7, 1_000, i64::MIN, i64::MAX];
    for &n in values {
        let mut plain = [0xffu8; BUFFER_LEN];
        let mut terminated = [0xffu8; BUFFER_LEN];
        let plain = convert(n, SliceCursor::new(&mut plain)).finish().unwrap();
        let terminated = convert_with_terminator(n, SliceCursor::new(&mut terminated))
            .finish()
            .unwrap();
        assert_eq!(terminated.len(), plain.len() + 1);
        assert_eq!(&terminated[..plain.len()], plain);
        assert_eq!(terminated[plain.len()], TERMINATOR);
    }
}

#[test]
fn test_raw_cursor() {
    let mut bytes = [0xffu8; BUFFER_LEN];
    let start = bytes.as_mut_ptr();

    let end = unsafe { raw::convert(u32::MAX, start) };
    let len = end as usize - start as usize;
    assert_eq!(&bytes[..len], b"4294967295");
    assert_eq!(bytes[len], 0xff);

    let end = unsafe { raw::convert_with_terminator(-42i16, start) };
    let len = end as usize - start as usize;
    assert_eq!(&bytes[..len], b"-42\0");

    let cursor = unsafe { RawCursor::new(start) };
    let cursor = convert(7u8, cursor);
    let cursor = convert(8u8, cursor);
    assert_eq!(cursor.as_ptr() as usize - start as usize, 2);
    assert_eq!(&bytes[..2], b"78");
}

#[test]
fn test_slice_cursor_exact_fit() {
    let mut buf = [0u8; 11];
    let cursor = convert(i32::MIN, SliceCursor::new(&mut buf));
    assert_eq!(cursor.position(), 11);
    assert_eq!(cursor.capacity(), 11);
    assert!(!cursor.overflowed());
    assert_eq!(cursor.finish().unwrap(), b"-2147483648");
}

#[test]
fn test_slice_cursor_overflow() {
    let mut buf = [0u8; 5];
    let cursor = convert_with_terminator(u64::MAX, SliceCursor::new(&mut buf));
    assert!(cursor.overflowed());
    assert_eq!(cursor.position(), 21);
    let err = cursor.finish().unwrap_err();
    assert_eq!(
        *err.kind(),
        ErrorKind::Capacity {
            required: 21,
            available: 5
        }
    );
    assert_eq!(
        err.to_string(),
        "output storage too small: 21 bytes required but only 5 available"
    );
    // The prefix that fit is still there.
    assert_eq!(&buf, b"18446");
}

#[test]
fn test_convert_to_slice() {
    let mut buf = [0u8; 4];
    assert_eq!(convert_to_slice(-128i8, &mut buf).unwrap(), "-128");
    assert_eq!(convert_to_slice(0u64, &mut buf).unwrap(), "0");

    let err = convert_to_slice(10_000u16, &mut buf).unwrap_err();
    assert_eq!(
        *err.kind(),
        ErrorKind::Capacity {
            required: 5,
            available: 4
        }
    );
}

#[test]
fn test_sink_reuse_through_mut_ref() {
    let mut buf = [0u8; 16];
    let mut cursor = SliceCursor::new(&mut buf);
    convert(12u8, &mut cursor);
    cursor.put(b',');
    convert(-34i64, &mut cursor);
    assert_eq!(cursor.finish().unwrap(), b"12,-34");
}

#[test]
fn test_buffer() {
    let mut buf = Buffer::default();
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);

    assert_eq!(buf.format(i128::MIN), "-170141183460469231731687303715884105728");
    assert_eq!(buf.len(), <i128 as Integer>::MAX_LEN);

    let c = buf.format_with_terminator(u128::MAX);
    assert_eq!(c.to_bytes(), b"340282366920938463463374607431768211455");
    assert_eq!(c.to_bytes_with_nul().len(), BUFFER_LEN - 1);
    assert_eq!(buf.as_str(), "340282366920938463463374607431768211455");

    // A shorter value fully replaces a longer one.
    assert_eq!(buf.format(5u8), "5");
    assert_eq!(&*buf, "5");
    assert_eq!(buf.to_string(), "5");
    assert_eq!(format!("{:?}", buf), "\"5\"");
    assert_eq!(buf.as_bytes(), render(5u8).as_bytes());

    let c = buf.format_with_terminator(i128::MIN);
    assert_eq!(c.to_bytes_with_nul().len(), BUFFER_LEN);
}
