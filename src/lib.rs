//! A growable bitset for row metadata.
//!
//! A [`BitMask`] records which columns of a row are present, dirty, or null.
//! Bits are packed into 24-bit words, and the mask grows one word at a time as
//! higher positions are referenced; it never shrinks. Binary operations size
//! their result to the larger operand, treating absent words as zero.
//!
//! ```
//! use bitmask::BitMask;
//!
//! let mut mask = BitMask::new();
//! mask.set(5);
//! mask.set(40);
//! assert_eq!(mask.to_array(), vec![5, 40]);
//! assert_eq!(mask.capacity(), 48);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod bytes;
pub mod error;
pub mod mask;
pub mod ops;

pub use error::{Error, Result};
pub use mask::{BitMask, WORD_BITS, WORD_MASK};
pub use ops::Ones;

pub use common::{Clear, HeapSize};
/// Common traits that are re-used throughout the crate.
pub mod common {

    pub trait Clear {
        /// Clears `self`, without changing its capacity.
        fn clear(&mut self);
    }

    pub trait HeapSize {
        /// Active (len) and allocated (cap) heap sizes in bytes.
        /// This should not include the size of `self` itself.
        fn heap_size(&self) -> (usize, usize) { (0, 0) }
    }
}
