//! Errors raised by the validated entry points of [`BitMask`](crate::BitMask).

/// Failures when building or addressing a mask from untrusted input.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A bit position was negative, or does not fit in `usize`.
    #[error("invalid bit position {bit}")]
    InvalidArgument { bit: i64 },
    /// A raw word held bits above the 24-bit radix.
    #[error("word {index} has value {value:#x}, which exceeds the 24-bit word range")]
    WordOutOfRange { index: usize, value: u32 },
    /// A byte image was not a whole number of words.
    #[error("byte image of length {len} is not a whole number of 4-byte words")]
    ByteLength { len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;

/// Converts a signed bit position into an index, rejecting negatives.
#[inline]
pub(crate) fn bit_index(bit: i64) -> Result<usize> {
    usize::try_from(bit).map_err(|_| Error::InvalidArgument { bit })
}
