use super::unsigned::Unsigned;
use super::width::write_magnitude;
use crate::constants::MINUS_SIGN;
use crate::Sink;

/// Writes a signed value given as its two's complement bits `bits` in the same-width
/// unsigned type.
///
/// The magnitude of a negative value is `0 - bits` in the unsigned domain, which is
/// exact for the minimum value (`i8::MIN` gives `128u8`) where negating in the signed
/// domain would overflow.
#[inline(always)]
pub(crate) fn write_signed<U, S>(is_negative: bool, bits: U, sink: &mut S)
where
    U: Unsigned,
    S: Sink + ?Sized,
{
    if is_negative {
        sink.put(MINUS_SIGN);
        write_magnitude(U::ZERO.wrapping_sub(bits), sink);
    } else {
        write_magnitude(bits, sink);
    }
}
