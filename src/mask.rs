//! The `BitMask` type and its core operations.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cmp::max;
use core::fmt;
use core::hash::{Hash, Hasher};

use smallvec::{smallvec, SmallVec};

use crate::error::{bit_index, Result};
use crate::{Clear, HeapSize};

/// The number of bits held by each word.
///
/// Word values stay below `2^24`, the range that survives conversion through
/// hosts whose only number type is a double or a tagged small integer.
pub const WORD_BITS: usize = 24;
/// The bits of a `u32` that a word may use.
pub const WORD_MASK: u32 = (1 << WORD_BITS) - 1;

/// Word index and in-word mask for a bit position.
#[inline(always)]
fn locate(bit: usize) -> (usize, u32) {
    (bit / WORD_BITS, 1 << (bit % WORD_BITS))
}

/// A growable set of bit positions, packed into 24-bit words.
///
/// Capacity is always a whole number of words, starts at one word, and never
/// decreases. Masks of up to two words are stored inline.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u32>", into = "Vec<u32>"))]
#[derive(Clone)]
pub struct BitMask {
    /// Word `k` holds bits `k * 24 ..= k * 24 + 23`, least significant first.
    pub(crate) words: SmallVec<[u32; 2]>,
}

impl BitMask {
    /// An empty mask with a capacity of one word.
    pub fn new() -> Self {
        Self { words: smallvec![0] }
    }

    /// An empty mask able to address at least `bits` positions without growing.
    ///
    /// The capacity is rounded up to a multiple of [`WORD_BITS`], and is never
    /// less than one word.
    pub fn with_capacity(bits: usize) -> Self {
        let mut mask = Self::new();
        mask.grow(bits);
        mask
    }

    /// The number of addressable bit positions.
    #[inline(always)] pub fn capacity(&self) -> usize { self.words.len() * WORD_BITS }
    /// The packed words, least significant position first.
    #[inline(always)] pub fn words(&self) -> &[u32] { &self.words[..] }

    /// Ensures the capacity is at least `bits`, adding whole words.
    pub fn grow(&mut self, bits: usize) {
        self.grow_words(bits.div_ceil(WORD_BITS));
    }

    #[inline]
    fn grow_words(&mut self, words: usize) {
        if self.words.len() < words {
            self.words.resize(words, 0);
        }
    }

    /// Sets `bit`, growing the mask if `bit` is beyond its capacity.
    #[inline]
    pub fn set(&mut self, bit: usize) {
        let (index, mask) = locate(bit);
        self.grow_words(index + 1);
        self.words[index] |= mask;
    }

    /// Tests `bit`, growing the mask to cover it.
    ///
    /// The growth happens even though this is a read: after the call the mask
    /// can address `bit`. Use [`BitMask::contains`] to test without mutating.
    #[inline]
    pub fn bit_is_set(&mut self, bit: usize) -> bool {
        let (index, mask) = locate(bit);
        self.grow_words(index + 1);
        self.words[index] & mask != 0
    }

    /// Tests `bit` without changing the mask; bits beyond capacity are unset.
    #[inline]
    pub fn contains(&self, bit: usize) -> bool {
        let (index, mask) = locate(bit);
        self.words.get(index).map_or(false, |word| word & mask != 0)
    }

    /// Clears `bit`. Bits beyond capacity are already clear, and nothing grows.
    #[inline]
    pub fn unset(&mut self, bit: usize) {
        let (index, mask) = locate(bit);
        if let Some(word) = self.words.get_mut(index) {
            *word &= !mask;
        }
    }

    /// As [`BitMask::set`], for a position that may be negative.
    pub fn try_set(&mut self, bit: i64) -> Result<()> {
        self.set(bit_index(bit)?);
        Ok(())
    }

    /// As [`BitMask::bit_is_set`], for a position that may be negative.
    pub fn try_bit_is_set(&mut self, bit: i64) -> Result<bool> {
        Ok(self.bit_is_set(bit_index(bit)?))
    }

    /// True iff any bit is set.
    #[inline]
    pub fn is_non_zero(&self) -> bool {
        self.words.iter().any(|word| *word != 0)
    }

    /// The number of set bits.
    pub fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Word-by-word equality, treating words beyond either capacity as zero.
    pub fn is_equal_to(&self, other: &Self) -> bool {
        let len = max(self.words.len(), other.words.len());
        (0 .. len).all(|index| self.word(index) == other.word(index))
    }

    /// The word at `index`, or zero beyond capacity.
    #[inline(always)]
    pub(crate) fn word(&self, index: usize) -> u32 {
        self.words.get(index).copied().unwrap_or(0)
    }

    /// A new mask sized to the larger operand, combining words with `op`.
    pub(crate) fn combine(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        let len = max(self.words.len(), other.words.len());
        Self { words: (0 .. len).map(|index| op(self.word(index), other.word(index))).collect() }
    }

    /// Grows `self` to the larger operand and combines words in place with `op`.
    pub(crate) fn combine_with(&mut self, other: &Self, op: impl Fn(u32, u32) -> u32) {
        self.grow_words(other.words.len());
        for (index, word) in self.words.iter_mut().enumerate() {
            *word = op(*word, other.word(index));
        }
    }

    /// Bitwise intersection, sized to the larger operand.
    pub fn and(&self, other: &Self) -> Self { self.combine(other, |a, b| a & b) }
    /// Bitwise union, sized to the larger operand.
    pub fn or(&self, other: &Self) -> Self { self.combine(other, |a, b| a | b) }
    /// Bitwise symmetric difference, sized to the larger operand.
    pub fn xor(&self, other: &Self) -> Self { self.combine(other, |a, b| a ^ b) }

    /// Replaces `self` with its union with `other`, returning `self` for chaining.
    pub fn or_with(&mut self, other: &Self) -> &mut Self {
        self.combine_with(other, |a, b| a | b);
        self
    }
    /// Replaces `self` with its intersection with `other`, returning `self` for chaining.
    pub fn and_with(&mut self, other: &Self) -> &mut Self {
        self.combine_with(other, |a, b| a & b);
        self
    }
    /// Replaces `self` with its symmetric difference with `other`, returning `self` for chaining.
    pub fn xor_with(&mut self, other: &Self) -> &mut Self {
        self.combine_with(other, |a, b| a ^ b);
        self
    }

    /// The set positions, in ascending order.
    pub fn to_array(&self) -> Vec<usize> {
        self.iter().collect()
    }

    /// Each word in base 2, unpadded, concatenated in word order.
    ///
    /// A debugging aid: word boundaries are not marked, so the result does not
    /// identify the mask.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl Default for BitMask {
    fn default() -> Self { Self::new() }
}

impl PartialEq for BitMask {
    #[inline(always)] fn eq(&self, other: &Self) -> bool { self.is_equal_to(other) }
}
impl Eq for BitMask { }

impl Hash for BitMask {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Trailing zero words do not affect equality, and must not affect the hash.
        let len = self.words.iter().rposition(|word| *word != 0).map_or(0, |index| index + 1);
        self.words[.. len].hash(state);
    }
}

impl fmt::Display for BitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in self.words.iter() {
            write!(f, "{:b}", word)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BitMask")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Clear for BitMask {
    #[inline(always)] fn clear(&mut self) { self.words.fill(0) }
}

impl HeapSize for BitMask {
    fn heap_size(&self) -> (usize, usize) {
        if self.words.spilled() {
            let size = core::mem::size_of::<u32>();
            (size * self.words.len(), size * self.words.capacity())
        } else {
            (0, 0)
        }
    }
}
