use arrayvec::ArrayVec;

use crate::Error;

/// A write-one-byte-and-advance cursor over storage owned by the caller.
///
/// This is the only interface conversions use for output: they never read back what was
/// written, never assume contiguous memory and never resize anything.
///
/// A `&mut S` is a sink whenever `S` is, so a sink can be lent to [`convert`] and used
/// again afterwards.
///
/// [`convert`]: fn.convert.html
pub trait Sink {
    /// Writes `byte` at the current position and advances by one.
    fn put(&mut self, byte: u8);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn put(&mut self, byte: u8) {
        (**self).put(byte);
    }
}

/// Appends to the vector.
///
/// # Panics
///
/// Panics if the vector is already full, as [`ArrayVec::push`] does.
impl<const CAP: usize> Sink for ArrayVec<u8, CAP> {
    #[inline]
    fn put(&mut self, byte: u8) {
        self.push(byte);
    }
}

#[cfg(feature = "std")]
impl Sink for Vec<u8> {
    #[inline]
    fn put(&mut self, byte: u8) {
        self.push(byte);
    }
}

#[cfg(feature = "std")]
impl Sink for String {
    #[inline]
    fn put(&mut self, byte: u8) {
        self.push(char::from(byte));
    }
}

/// A sink over raw memory, for callers that guarantee capacity themselves.
///
/// No bounds are checked. Use [`SliceCursor`] when the capacity is not known to be
/// sufficient.
///
/// [`SliceCursor`]: struct.SliceCursor.html
#[derive(Debug)]
pub struct RawCursor {
    ptr: *mut u8,
}

impl RawCursor {
    /// Creates a cursor positioned at `ptr`.
    ///
    /// ## Safety
    ///
    /// `ptr` must be valid for writes of every byte that will be put through the cursor.
    /// For one conversion of an integer `I` that is [`Integer::MAX_LEN`] bytes, plus one
    /// if a terminator is written.
    ///
    /// [`Integer::MAX_LEN`]: trait.Integer.html#associatedconstant.MAX_LEN
    #[inline]
    pub unsafe fn new(ptr: *mut u8) -> RawCursor {
        RawCursor { ptr }
    }

    /// Returns the current position, one past the last byte written.
    #[inline]
    pub fn as_ptr(&self) -> *mut u8 {
        self.ptr
    }
}

impl Sink for RawCursor {
    #[inline]
    fn put(&mut self, byte: u8) {
        // SAFETY: the caller of `RawCursor::new` vouched for the capacity.
        unsafe {
            self.ptr.write(byte);
            self.ptr = self.ptr.add(1);
        }
    }
}

/// A checked sink over a byte slice.
///
/// Bytes that do not fit are dropped but still counted, so [`finish`] can report how much
/// room the conversion needed.
///
/// # Examples
/// ```
/// use int_decimal::{convert, ErrorKind, SliceCursor};
///
/// let mut buf = [0u8; 3];
/// let err = convert(-128i8, SliceCursor::new(&mut buf)).finish().unwrap_err();
/// assert_eq!(
///     *err.kind(),
///     ErrorKind::Capacity { required: 4, available: 3 }
/// );
/// ```
///
/// [`finish`]: struct.SliceCursor.html#method.finish
#[derive(Debug)]
pub struct SliceCursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    /// Creates a cursor positioned at the start of `buf`.
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> SliceCursor<'a> {
        SliceCursor { buf, pos: 0 }
    }

    /// Returns the number of bytes put so far, including any that did not fit.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the capacity of the underlying slice.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if at least one byte did not fit.
    #[inline]
    pub fn overflowed(&self) -> bool {
        self.pos > self.buf.len()
    }

    /// Returns the bytes written, or an [`ErrorKind::Capacity`] error if any byte was
    /// dropped.
    ///
    /// [`ErrorKind::Capacity`]: enum.ErrorKind.html#variant.Capacity
    pub fn finish(self) -> Result<&'a [u8], Error> {
        if self.overflowed() {
            return Err(Error::capacity(self.pos, self.buf.len()));
        }
        let SliceCursor { buf, pos } = self;
        Ok(&buf[..pos])
    }
}

impl Sink for SliceCursor<'_> {
    #[inline]
    fn put(&mut self, byte: u8) {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = byte;
        }
        self.pos += 1;
    }
}
