use super::emit::emit;
use super::unsigned::Unsigned;
use crate::Sink;

/// An unsigned working width, one link of the chain `U8 -> U16 -> U32 -> U64 -> U128`.
///
/// Digits are extracted in the narrowest width whose maximum value covers the magnitude,
/// so small values only walk the few decimal places that width has instead of the full
/// 39 places of a `u128`.
///
/// Conversions of a statically typed value pick the width with comparisons in the value's
/// own type; [`select`](Width::select) is the runtime chain for a magnitude whose type
/// is not known.
///
/// # Examples
/// ```
/// use int_decimal::Width;
///
/// assert_eq!(Width::select(255), Width::U8);
/// assert_eq!(Width::select(256), Width::U16);
/// assert_eq!(Width::select(u64::MAX as u128), Width::U64);
/// assert_eq!(Width::U64.next(), Width::U128);
/// assert_eq!(Width::U128.next(), Width::U128);
/// ```
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
pub enum Width {
    /// 8-bit, places `100..1`.
    U8,
    /// 16-bit, places `10^4..1`.
    U16,
    /// 32-bit, places `10^9..1`.
    U32,
    /// 64-bit, places `10^19..1`.
    U64,
    /// 128-bit, places `10^38..1`. The end of the chain.
    U128,
}

impl Width {
    /// The first link of the chain.
    pub const NARROWEST: Width = Width::U8;

    /// The last link of the chain, which absorbs any magnitude.
    pub const WIDEST: Width = Width::U128;

    /// Number of bits in this width.
    pub const fn bits(self) -> u32 {
        match self {
            Width::U8 => u8::BITS,
            Width::U16 => u16::BITS,
            Width::U32 => u32::BITS,
            Width::U64 => u64::BITS,
            Width::U128 => u128::BITS,
        }
    }

    /// The largest magnitude this width can hold.
    pub const fn max_value(self) -> u128 {
        match self {
            Width::U8 => u8::MAX as u128,
            Width::U16 => u16::MAX as u128,
            Width::U32 => u32::MAX as u128,
            Width::U64 => u64::MAX as u128,
            Width::U128 => u128::MAX,
        }
    }

    /// The number of decimal digits in [`max_value`](Width::max_value).
    pub const fn max_digits(self) -> usize {
        self.top_place().ilog10() as usize + 1
    }

    /// The largest power of ten not exceeding [`max_value`](Width::max_value); digit
    /// extraction in this width starts here.
    pub const fn top_place(self) -> u128 {
        let max = self.max_value();
        let mut place = 1;
        while place <= max / 10 {
            place *= 10;
        }
        place
    }

    /// The next wider link of the chain. [`Width::U128`] is its own successor.
    pub const fn next(self) -> Width {
        match self {
            Width::U8 => Width::U16,
            Width::U16 => Width::U32,
            Width::U32 => Width::U64,
            Width::U64 | Width::U128 => Width::U128,
        }
    }

    /// Returns `true` if `magnitude` fits in this width.
    #[inline]
    pub const fn covers(self, magnitude: u128) -> bool {
        magnitude <= self.max_value()
    }

    /// Walks the chain from [`Width::NARROWEST`] and returns the first width that covers
    /// `magnitude`.
    #[inline]
    pub const fn select(magnitude: u128) -> Width {
        Width::select_within(magnitude, Width::WIDEST)
    }

    /// Like [`select`](Width::select), but stops at `ceiling` even if `ceiling` does not
    /// cover `magnitude`. Use the value's own type as the ceiling to keep the walk short.
    #[inline]
    pub const fn select_within(magnitude: u128, ceiling: Width) -> Width {
        let mut width = Width::NARROWEST;
        while (width as u8) < (ceiling as u8) && !width.covers(magnitude) {
            width = width.next();
        }
        width
    }
}

/// The narrowest width that covers `magnitude`, never wider than `T`.
///
/// Every comparison is made in `T` against a constant, and links at or above `T` are
/// known to cover it, so for a statically known `T` the chain folds to at most
/// `T::WIDTH` comparisons in `T`'s own width once inlined.
#[inline(always)]
pub(crate) fn narrowest<T: Unsigned>(magnitude: T) -> Width {
    if magnitude.covered_by(Width::U8) {
        Width::U8
    } else if magnitude.covered_by(Width::U16) {
        Width::U16
    } else if magnitude.covered_by(Width::U32) {
        Width::U32
    } else if magnitude.covered_by(Width::U64) {
        Width::U64
    } else {
        Width::U128
    }
}

/// Writes `magnitude` in the narrowest width that covers it, never wider than `T`.
#[inline(always)]
pub(crate) fn write_magnitude<T, S>(magnitude: T, sink: &mut S)
where
    T: Unsigned,
    S: Sink + ?Sized,
{
    let wide = magnitude.widen();
    match narrowest(magnitude) {
        Width::U8 => emit(u8::narrow(wide), sink),
        Width::U16 => emit(u16::narrow(wide), sink),
        Width::U32 => emit(u32::narrow(wide), sink),
        Width::U64 => emit(u64::narrow(wide), sink),
        Width::U128 => emit(wide, sink),
    }
}
