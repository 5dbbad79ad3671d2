use core::ffi::CStr;
use core::fmt;
use core::ops::Deref;
use core::str;

use arrayvec::ArrayVec;

use crate::constants::{BUFFER_LEN, TERMINATOR};
use crate::{convert, convert_with_terminator, Integer};

/// <b><u>A key type</u></b>. Represents a stack-allocated buffer you can use to get a
/// decimal `&str` or `&CStr` for any integer without touching the heap.
///
/// The buffer is sized for the longest possible output (`i128::MIN` plus a terminator),
/// so formatting into it can never run out of room.
///
/// # Example
/// ```
/// use int_decimal::Buffer;
///
/// // Create a stack-allocated buffer...
/// let mut buf = Buffer::default();
///
/// // Write "-2147483648" into the buffer...
/// buf.format(i32::MIN);
///
/// // Get a view into the buffer as a &str...
/// let s = buf.as_str();
/// assert_eq!("-2147483648", s);
///
/// // Or ask for a NUL-terminated copy of the same digits.
/// let c = buf.format_with_terminator(i32::MIN);
/// assert_eq!(c.to_bytes(), b"-2147483648");
/// ```
#[derive(Clone)]
pub struct Buffer {
    inner: ArrayVec<u8, BUFFER_LEN>,
}

impl Buffer {
    /// Constructs a new, empty buffer.
    #[inline]
    pub fn new() -> Buffer {
        Buffer {
            inner: ArrayVec::new(),
        }
    }

    /// Replaces the buffer's contents with the decimal form of `n` and returns it.
    #[inline]
    pub fn format<I: Integer>(&mut self, n: I) -> &str {
        self.inner.clear();
        convert(n, &mut self.inner);
        self.as_str()
    }

    /// Replaces the buffer's contents with the decimal form of `n` followed by a
    /// terminator byte and returns it as a C string.
    #[inline]
    pub fn format_with_terminator<I: Integer>(&mut self, n: I) -> &CStr {
        self.inner.clear();
        convert_with_terminator(n, &mut self.inner);
        // SAFETY: the contents are ASCII digits and '-', then exactly one trailing NUL.
        unsafe { CStr::from_bytes_with_nul_unchecked(&self.inner) }
    }

    /// Returns a byte slice of the digits written, without any terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        match self.inner.split_last() {
            Some((&TERMINATOR, digits)) => digits,
            _ => self.inner.as_slice(),
        }
    }

    /// Returns a string slice of the digits written, without any terminator.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: only ASCII is ever written into the buffer.
        unsafe { str::from_utf8_unchecked(self.as_bytes()) }
    }

    /// Returns `true` if nothing has been written yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Returns the length of the digits written, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }
}

impl AsRef<str> for Buffer {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl Default for Buffer {
    /// Same as the [`new`] method.
    ///
    /// [`new`]: struct.Buffer.html#method.new
    #[inline]
    fn default() -> Buffer {
        Buffer::new()
    }
}

impl Deref for Buffer {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "with-serde")]
mod serialization {
    use serde::ser::{Serialize, Serializer};

    use super::*;

    impl Serialize for Buffer {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }
}
