use super::sign::write_signed;
use super::width::write_magnitude;
use super::Integer;
use crate::constants::*;
use crate::Sink;

macro_rules! impl_unsigned_Integer {
    ($($max_len:expr => $t:ident),*) => {$(
        impl Integer for $t {
            const MAX_LEN: usize = $max_len;

            #[inline]
            fn write_to<S: Sink + ?Sized>(self, sink: &mut S) {
                write_magnitude(self, sink);
            }
        }

        impl crate::private::Sealed for $t {}
    )*};
}

macro_rules! impl_signed_Integer {
    ($($max_len:expr => $t:ident as $conv:ident),*) => {$(
        impl Integer for $t {
            const MAX_LEN: usize = $max_len;

            #[inline]
            fn write_to<S: Sink + ?Sized>(self, sink: &mut S) {
                write_signed(self < 0, self as $conv, sink);
            }
        }

        impl crate::private::Sealed for $t {}
    )*};
}

impl_unsigned_Integer!(
    U8_MAX_LEN => u8,
    U16_MAX_LEN => u16,
    U32_MAX_LEN => u32,
    U64_MAX_LEN => u64,
    U128_MAX_LEN => u128
);

impl_signed_Integer!(
    I8_MAX_LEN => i8 as u8,
    I16_MAX_LEN => i16 as u16,
    I32_MAX_LEN => i32 as u32,
    I64_MAX_LEN => i64 as u64,
    I128_MAX_LEN => i128 as u128
);

// Pointer-sized integers go through the fixed width of the same size.
macro_rules! impl_size_Integer {
    ($($max_len:expr => $t:ident as $conv:ident),*) => {$(
        impl Integer for $t {
            const MAX_LEN: usize = $max_len;

            #[inline]
            fn write_to<S: Sink + ?Sized>(self, sink: &mut S) {
                (self as $conv).write_to(sink);
            }
        }

        impl crate::private::Sealed for $t {}
    )*};
}

#[cfg(target_pointer_width = "16")]
impl_size_Integer!(USIZE_MAX_LEN => usize as u16, ISIZE_MAX_LEN => isize as i16);

#[cfg(target_pointer_width = "32")]
impl_size_Integer!(USIZE_MAX_LEN => usize as u32, ISIZE_MAX_LEN => isize as i32);

#[cfg(target_pointer_width = "64")]
impl_size_Integer!(USIZE_MAX_LEN => usize as u64, ISIZE_MAX_LEN => isize as i64);
