use std::fs::File;
use std::io::{self, BufWriter, LineWriter, Stderr, StderrLock, Stdout, StdoutLock, Write};
use std::net::TcpStream;

use crate::{Buffer, Integer};

/// <b><u>A key trait</u></b>. Gives types in the standard library that implement
/// [`io::Write`] or [`fmt::Write`] a [`write_decimal`] method.
///
/// Digits are staged in a stack [`Buffer`] and handed to the writer in one call.
///
/// # Example
/// ```
/// use int_decimal::WriteDecimal;
///
/// let mut writer = Vec::new();
/// writer.write_decimal(-1_000_000i32).unwrap();
/// writer.push(b' ');
/// writer.write_decimal(255u8).unwrap();
/// assert_eq!(writer, b"-1000000 255");
/// ```
///
/// [`Buffer`]: struct.Buffer.html
/// [`fmt::Write`]: https://doc.rust-lang.org/stable/std/fmt/fn.write.html
/// [`io::Write`]: https://doc.rust-lang.org/stable/std/io/trait.Write.html
/// [`write_decimal`]: trait.WriteDecimal.html#method.write_decimal
pub trait WriteDecimal {
    /// Writes the decimal form of `n` and returns the number of bytes written.
    fn write_decimal<I: Integer>(&mut self, n: I) -> Result<usize, io::Error>;
}

macro_rules! impl_for_fmt_write {
    () => {
        #[inline]
        fn write_decimal<I: Integer>(&mut self, n: I) -> Result<usize, io::Error> {
            use std::fmt::Write;
            let mut buf = Buffer::default();
            let s = buf.format(n);
            self.write_str(s)
                .map_err(|_| io::Error::new(io::ErrorKind::Other, "fmt error"))?;
            Ok(s.len())
        }
    };
}

macro_rules! impl_for_io_write {
    () => {
        #[inline]
        fn write_decimal<I: Integer>(&mut self, n: I) -> Result<usize, io::Error> {
            let mut buf = Buffer::default();
            let s = buf.format(n);
            self.write_all(s.as_bytes())?;
            Ok(s.len())
        }
    };
}

impl WriteDecimal for String {
    impl_for_fmt_write! {}
}

impl<W: Write> WriteDecimal for BufWriter<W> {
    impl_for_io_write! {}
}

impl WriteDecimal for File {
    impl_for_io_write! {}
}

impl<W: Write> WriteDecimal for LineWriter<W> {
    impl_for_io_write! {}
}

impl<'a> WriteDecimal for StderrLock<'a> {
    impl_for_io_write! {}
}

impl WriteDecimal for Stderr {
    impl_for_io_write! {}
}

impl<'a> WriteDecimal for StdoutLock<'a> {
    impl_for_io_write! {}
}

impl WriteDecimal for Stdout {
    impl_for_io_write! {}
}

impl WriteDecimal for TcpStream {
    impl_for_io_write! {}
}

impl WriteDecimal for Vec<u8> {
    impl_for_io_write! {}
}

impl WriteDecimal for io::Cursor<Vec<u8>> {
    impl_for_io_write! {}
}

impl<'a> WriteDecimal for io::Cursor<&'a mut [u8]> {
    impl_for_io_write! {}
}

impl<'a, W: WriteDecimal + ?Sized> WriteDecimal for &'a mut W {
    #[inline]
    fn write_decimal<I: Integer>(&mut self, n: I) -> Result<usize, io::Error> {
        (**self).write_decimal(n)
    }
}
