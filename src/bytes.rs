//! Methods to convert masks to and from words and byte slices.
//!
//! The byte image is the word sequence in native byte order, four bytes per
//! word. It is meant for handing a mask across an in-process boundary, not as
//! a portable format.

use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::mask::{BitMask, WORD_MASK};

impl BitMask {
    /// Presents the words as bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.words())
    }

    /// Reconstructs a mask from the output of [`BitMask::as_bytes`].
    ///
    /// The bytes need not be aligned. An empty slice yields [`BitMask::new`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let size = core::mem::size_of::<u32>();
        if bytes.len() % size != 0 {
            return Err(Error::ByteLength { len: bytes.len() });
        }
        let words = bytes.chunks_exact(size).map(bytemuck::pod_read_unaligned::<u32>).collect::<Vec<_>>();
        Self::try_from(words)
    }
}

impl TryFrom<Vec<u32>> for BitMask {
    type Error = Error;

    fn try_from(words: Vec<u32>) -> Result<Self> {
        if let Some((index, value)) = words.iter().copied().enumerate().find(|(_, word)| word & !WORD_MASK != 0) {
            return Err(Error::WordOutOfRange { index, value });
        }
        let mut mask = BitMask::new();
        if !words.is_empty() {
            mask.words = words.into();
        }
        Ok(mask)
    }
}

impl From<BitMask> for Vec<u32> {
    fn from(mask: BitMask) -> Self {
        mask.words.into_vec()
    }
}
