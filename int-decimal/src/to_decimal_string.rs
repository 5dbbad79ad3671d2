use crate::{convert, Integer};

/// <b><u>A key trait</u></b>. Gives integers a [`to_decimal_string`] method.
///
/// This trait is sealed; so you cannot implement it on your own types.
///
/// # Example
/// ```
/// use int_decimal::ToDecimalString;
///
/// assert_eq!((-42i16).to_decimal_string(), "-42");
/// assert_eq!(u128::MAX.to_decimal_string(), "340282366920938463463374607431768211455");
/// ```
///
/// [`to_decimal_string`]: trait.ToDecimalString.html#method.to_decimal_string
pub trait ToDecimalString: crate::private::Sealed {
    /// Returns the decimal form of `self` in a freshly allocated `String`.
    fn to_decimal_string(&self) -> String;
}

impl<I> ToDecimalString for I
where
    I: Integer,
{
    #[inline]
    fn to_decimal_string(&self) -> String {
        convert(*self, String::with_capacity(I::MAX_LEN))
    }
}
