use super::unsigned::Unsigned;
use crate::Sink;

/// Writes the shortest decimal form of `x` into `sink`.
///
/// Places above `x` are skipped without output. From the first place not above `x`
/// onward, every place yields a digit, interior zeros included. The units place always
/// yields a digit, so zero comes out as `"0"`.
#[inline(always)]
pub(crate) fn emit<U, S>(mut x: U, sink: &mut S)
where
    U: Unsigned,
    S: Sink + ?Sized,
{
    let magnitude = x;
    for &place in U::PLACES.iter().skip_while(move |&&place| place > magnitude) {
        let digit = x / place;
        sink.put(b'0' + digit.digit());
        x = x - digit * place;
    }
    sink.put(b'0' + x.digit());
}
