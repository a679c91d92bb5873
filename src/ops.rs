//! Iteration and operator sugar for [`BitMask`].

use core::iter::{Enumerate, FusedIterator};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign};
use core::slice;

use crate::mask::{BitMask, WORD_BITS};

/// An iterator over the set positions of a [`BitMask`], in ascending order.
pub struct Ones<'a> {
    words: Enumerate<slice::Iter<'a, u32>>,
    /// The position of bit zero of `current`.
    base: usize,
    /// The not-yet-reported bits of the current word.
    current: u32,
}

impl BitMask {
    /// An iterator over the set positions, in ascending order.
    pub fn iter(&self) -> Ones<'_> {
        Ones {
            words: self.words().iter().enumerate(),
            base: 0,
            current: 0,
        }
    }
}

impl<'a> Iterator for Ones<'a> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            let (index, word) = self.words.next()?;
            self.base = index * WORD_BITS;
            self.current = *word;
        }
        let bit = self.current.trailing_zeros() as usize;
        // clear lowest set bit
        self.current &= self.current - 1;
        Some(self.base + bit)
    }
}

impl FusedIterator for Ones<'_> { }

impl<'a> IntoIterator for &'a BitMask {
    type Item = usize;
    type IntoIter = Ones<'a>;
    #[inline(always)] fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl Extend<usize> for BitMask {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for bit in iter {
            self.set(bit);
        }
    }
}

impl FromIterator<usize> for BitMask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut mask = BitMask::new();
        mask.extend(iter);
        mask
    }
}

impl BitAnd for &BitMask {
    type Output = BitMask;
    #[inline(always)] fn bitand(self, rhs: Self) -> BitMask { self.and(rhs) }
}
impl BitOr for &BitMask {
    type Output = BitMask;
    #[inline(always)] fn bitor(self, rhs: Self) -> BitMask { self.or(rhs) }
}
impl BitXor for &BitMask {
    type Output = BitMask;
    #[inline(always)] fn bitxor(self, rhs: Self) -> BitMask { self.xor(rhs) }
}

impl BitAndAssign<&BitMask> for BitMask {
    #[inline(always)] fn bitand_assign(&mut self, rhs: &BitMask) { self.and_with(rhs); }
}
impl BitOrAssign<&BitMask> for BitMask {
    #[inline(always)] fn bitor_assign(&mut self, rhs: &BitMask) { self.or_with(rhs); }
}
impl BitXorAssign<&BitMask> for BitMask {
    #[inline(always)] fn bitxor_assign(&mut self, rhs: &BitMask) { self.xor_with(rhs); }
}
