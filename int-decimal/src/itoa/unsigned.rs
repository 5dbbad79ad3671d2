use core::ops::{Div, Mul, Sub};

use super::places::{U128_PLACES, U16_PLACES, U32_PLACES, U64_PLACES, U8_PLACES};
use super::Width;

/// An unsigned working width for magnitude arithmetic.
pub(crate) trait Unsigned:
    'static + Copy + PartialOrd + Div<Output = Self> + Mul<Output = Self> + Sub<Output = Self>
{
    const ZERO: Self;
    const WIDTH: Width;
    /// Places above the units place, most significant first.
    const PLACES: &'static [Self];

    fn widen(self) -> u128;

    /// Truncates `wide` to this width. Callers only pass values this width covers.
    fn narrow(wide: u128) -> Self;

    /// The value as a single digit. Only called on values below ten.
    fn digit(self) -> u8;

    fn wrapping_sub(self, other: Self) -> Self;

    /// Returns `true` if the value fits in `width`, comparing in this width.
    fn covered_by(self, width: Width) -> bool;
}

macro_rules! impl_Unsigned {
    ($($t:ident => $width:ident, $places:ident);*) => {$(
        impl Unsigned for $t {
            const ZERO: Self = 0;
            const WIDTH: Width = Width::$width;
            const PLACES: &'static [Self] = &$places;

            #[inline(always)]
            fn widen(self) -> u128 {
                self as u128
            }

            #[inline(always)]
            fn narrow(wide: u128) -> Self {
                wide as $t
            }

            #[inline(always)]
            fn digit(self) -> u8 {
                self as u8
            }

            #[inline(always)]
            fn wrapping_sub(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }

            #[inline(always)]
            fn covered_by(self, width: Width) -> bool {
                // Widths at or above this one hold every value; below it, the
                // maximum truncates losslessly into this width.
                width >= Self::WIDTH || self <= width.max_value() as $t
            }
        }
    )*};
}

impl_Unsigned!(
    u8 => U8, U8_PLACES;
    u16 => U16, U16_PLACES;
    u32 => U32, U32_PLACES;
    u64 => U64, U64_PLACES;
    u128 => U128, U128_PLACES
);
