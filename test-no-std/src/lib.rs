//! Builds `bitmask` without `std`, exercising the `alloc`-only surface.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use bitmask::{BitMask, Error};

/// Marks the given columns as present and reports them back, rejecting negatives.
pub fn present_columns(columns: &[i64]) -> Result<Vec<usize>, Error> {
    let mut mask = BitMask::new();
    for column in columns {
        mask.try_set(*column)?;
    }
    Ok(mask.to_array())
}
