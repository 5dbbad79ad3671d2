mod emit;
mod integers;
pub(crate) mod places;
mod sign;
mod unsigned;
pub(crate) mod width;

use core::str;

use crate::constants::TERMINATOR;
use crate::{Error, Sink, SliceCursor};

pub use self::width::Width;

/// An integer that can be written in decimal into a [`Sink`].
///
/// Implemented for every primitive integer type. This trait is sealed and cannot be
/// implemented for types outside of this crate.
///
/// [`Sink`]: trait.Sink.html
pub trait Integer: crate::private::Sealed + Copy {
    /// The most bytes a value of this type can produce, minus sign included.
    const MAX_LEN: usize;

    #[doc(hidden)]
    fn write_to<S: Sink + ?Sized>(self, sink: &mut S);
}

/// Writes `value` as canonical decimal ASCII into `sink` and returns the sink, advanced
/// past the last character written.
///
/// The output has no leading zeros (zero itself is `"0"`), a single leading `'-'` for
/// negative values and never a `'+'`.
///
/// # Examples
/// ```
/// use int_decimal::{convert, SliceCursor};
///
/// let mut buf = [0u8; 20];
/// let cursor = convert(i64::MIN, SliceCursor::new(&mut buf));
/// assert_eq!(cursor.finish().unwrap(), b"-9223372036854775808");
/// ```
#[inline]
pub fn convert<I, S>(value: I, mut sink: S) -> S
where
    I: Integer,
    S: Sink,
{
    value.write_to(&mut sink);
    sink
}

/// Same as [`convert`], then writes one [`TERMINATOR`] byte and advances past it.
///
/// [`convert`]: fn.convert.html
/// [`TERMINATOR`]: constant.TERMINATOR.html
#[inline]
pub fn convert_with_terminator<I, S>(value: I, sink: S) -> S
where
    I: Integer,
    S: Sink,
{
    let mut sink = convert(value, sink);
    sink.put(TERMINATOR);
    sink
}

/// Writes `value` into the front of `buf`, failing with [`ErrorKind::Capacity`] instead
/// of truncating when `buf` is too short.
///
/// # Examples
/// ```
/// let mut buf = [0u8; 4];
/// assert_eq!(int_decimal::convert_to_slice(-128i8, &mut buf).unwrap(), "-128");
/// assert!(int_decimal::convert_to_slice(1000u16, &mut buf[..3]).is_err());
/// ```
///
/// [`ErrorKind::Capacity`]: enum.ErrorKind.html#variant.Capacity
pub fn convert_to_slice<I>(value: I, buf: &mut [u8]) -> Result<&str, Error>
where
    I: Integer,
{
    let written = convert(value, SliceCursor::new(buf)).finish()?;
    // SAFETY: every byte the conversion writes is an ASCII digit or '-'.
    Ok(unsafe { str::from_utf8_unchecked(written) })
}
