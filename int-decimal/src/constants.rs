/// Capacity of [`Buffer`]: the longest decimal form of any supported integer, which is
/// `i128::MIN` (39 digits + 1 minus sign), plus one terminator byte.
///
/// [`Buffer`]: struct.Buffer.html
pub const BUFFER_LEN: usize = I128_MAX_LEN + 1;

/// The byte written by [`convert_with_terminator`] after the digits.
///
/// [`convert_with_terminator`]: fn.convert_with_terminator.html
pub const TERMINATOR: u8 = 0;

pub(crate) const MINUS_SIGN: u8 = b'-';

pub(crate) const U8_MAX_LEN: usize = 3;
pub(crate) const U16_MAX_LEN: usize = 5;
pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const U64_MAX_LEN: usize = 20;
pub(crate) const U128_MAX_LEN: usize = 39;

pub(crate) const I8_MAX_LEN: usize = 4;
pub(crate) const I16_MAX_LEN: usize = 6;
pub(crate) const I32_MAX_LEN: usize = 11;
pub(crate) const I64_MAX_LEN: usize = 20;
pub(crate) const I128_MAX_LEN: usize = 40;

#[cfg(target_pointer_width = "16")]
pub(crate) const USIZE_MAX_LEN: usize = U16_MAX_LEN;
#[cfg(target_pointer_width = "32")]
pub(crate) const USIZE_MAX_LEN: usize = U32_MAX_LEN;
#[cfg(target_pointer_width = "64")]
pub(crate) const USIZE_MAX_LEN: usize = U64_MAX_LEN;

#[cfg(target_pointer_width = "16")]
pub(crate) const ISIZE_MAX_LEN: usize = I16_MAX_LEN;
#[cfg(target_pointer_width = "32")]
pub(crate) const ISIZE_MAX_LEN: usize = I32_MAX_LEN;
#[cfg(target_pointer_width = "64")]
pub(crate) const ISIZE_MAX_LEN: usize = I64_MAX_LEN;
