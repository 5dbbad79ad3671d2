use core::fmt;

/// This crate's error kind.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub enum ErrorKind {
    /// The output storage ran out of room before the conversion finished.
    Capacity {
        /// Number of bytes the conversion needed.
        required: usize,
        /// Number of bytes the storage could hold.
        available: usize,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::ErrorKind::*;
        match self {
            Capacity {
                required,
                available,
            } => write!(
                f,
                "output storage too small: {} bytes required but only {} available",
                required, available
            ),
        }
    }
}
