/*!
[![Crates.io](https://img.shields.io/crates/v/int-decimal.svg)](https://crates.io/crates/int-decimal)

A Rust crate for writing integers as canonical decimal ASCII, directly into storage the
caller owns. No heap allocation and no intermediate string object are involved, which
makes it a fit for telemetry, serialization and logging paths that convert many integers
per second.

# Picking a sink

Output goes through a [`Sink`], a write-one-byte-and-advance capability:

* [`Buffer`] - a stack buffer large enough for any supported integer.
* [`SliceCursor`] - a checked cursor over `&mut [u8]` that reports running out of room.
* [`RawCursor`] / [`raw`] - a pointer cursor; the caller guarantees capacity.
* [`arrayvec::ArrayVec<u8, CAP>`](arrayvec::ArrayVec) and, with the `std` feature,
  `Vec<u8>` and `String`.

# Examples

```rust
use int_decimal::Buffer;

let mut buf = Buffer::new();
assert_eq!(buf.format(-128i8), "-128");
assert_eq!(buf.format(u64::MAX), "18446744073709551615");
```

```rust
use int_decimal::{convert, convert_with_terminator, SliceCursor};

let mut bytes = [0xffu8; 8];
let cursor = convert(-1i32, SliceCursor::new(&mut bytes));
assert_eq!(cursor.finish().unwrap(), b"-1");

let mut bytes = [0xffu8; 8];
let cursor = convert_with_terminator(255u8, SliceCursor::new(&mut bytes));
assert_eq!(cursor.finish().unwrap(), b"255\0");
```

Only integral types implement [`Integer`], so anything else is rejected at build time:

```compile_fail
let mut buf = int_decimal::Buffer::new();
buf.format(1.5f64);
```

# Extra features

| Available features | What to put in your `Cargo.toml`                                  |
| :----------------- | :---------------------------------------------------------------- |
| `no_std`           | `int-decimal = { version = "0.1", default-features = false }`     |
| `with-serde`       | `int-decimal = { version = "0.1", features = ["with-serde"] }`    |
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    deprecated,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts
)]
#![warn(unused)]
#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::cast_possible_truncation)]

#[cfg(feature = "with-serde")]
#[macro_use]
extern crate serde;

mod buffer;
mod constants;
mod error;
mod error_kind;
mod itoa;
mod sink;
#[cfg(feature = "std")]
mod to_decimal_string;
#[cfg(feature = "std")]
mod write_decimal;


pub use self::buffer::Buffer;
pub use self::constants::{BUFFER_LEN, TERMINATOR};
pub use self::error::Error;
pub use self::error_kind::ErrorKind;
pub use self::itoa::{convert, convert_to_slice, convert_with_terminator, Integer, Width};
pub use self::sink::{RawCursor, SliceCursor, Sink};
#[cfg(feature = "std")]
pub use self::to_decimal_string::ToDecimalString;
#[cfg(feature = "std")]
pub use self::write_decimal::WriteDecimal;

/// Pointer-level entry points, for callers that manage their own output memory.
pub mod raw {
    use crate::{Integer, RawCursor};

    /// Writes `value` in decimal starting at `dst` and returns the pointer one past the
    /// last byte written.
    ///
    /// At most [`Integer::MAX_LEN`] bytes are written.
    ///
    /// ## Safety
    ///
    /// `dst` must be valid for writes of `I::MAX_LEN` bytes.
    ///
    /// ## Example
    ///
    /// ```
    /// let mut bytes = [0u8; 11];
    /// let start = bytes.as_mut_ptr();
    /// let end = unsafe { int_decimal::raw::convert(i32::MIN, start) };
    /// let len = end as usize - start as usize;
    /// assert_eq!(&bytes[..len], b"-2147483648");
    /// ```
    #[must_use]
    pub unsafe fn convert<I: Integer>(value: I, dst: *mut u8) -> *mut u8 {
        // SAFETY: capacity is forwarded from the caller.
        let cursor = unsafe { RawCursor::new(dst) };
        crate::convert(value, cursor).as_ptr()
    }

    /// As [`convert`], then writes a single terminator byte (`0`) after the digits.
    ///
    /// ## Safety
    ///
    /// `dst` must be valid for writes of `I::MAX_LEN + 1` bytes.
    #[must_use]
    pub unsafe fn convert_with_terminator<I: Integer>(value: I, dst: *mut u8) -> *mut u8 {
        // SAFETY: capacity is forwarded from the caller.
        let cursor = unsafe { RawCursor::new(dst) };
        crate::convert_with_terminator(value, cursor).as_ptr()
    }
}

mod private {
    pub trait Sealed {}
}
