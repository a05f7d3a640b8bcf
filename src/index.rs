// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`BoundedVec`](crate::BoundedVec).
//!
//! - `v[i]` and `v[range]` mirror slice behavior: they panic when out of
//!   bounds and accept every standard range form;
//! - [`BoundedVec::at`] / [`BoundedVec::at_mut`] are the checked forms, returning
//!   [`Error::OutOfBounds`];
//! - all views are restricted to the live prefix `[0..len)`.

// Crate imports
use crate::{error::Error, policy::Policy, vec::BoundedVec};

// Core imports
use core::ops::{
    Index, IndexMut, Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Returns the element at `pos`, or [`Error::OutOfBounds`] if `pos >= len`.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        let len = self.len;
        self.as_slice()
            .get(pos)
            .ok_or(Error::OutOfBounds { index: pos, len })
    }

    /// Mutable [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(pos)
            .ok_or(Error::OutOfBounds { index: pos, len })
    }
}

impl<T, const N: usize, P: Policy> Index<usize> for BoundedVec<T, N, P> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}
impl<T, const N: usize, P: Policy> IndexMut<usize> for BoundedVec<T, N, P> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

macro_rules! index_ranges {
    ($($range:ty),* $(,)?) => {$(
        impl<T, const N: usize, P: Policy> Index<$range> for BoundedVec<T, N, P> {
            type Output = [T];
            fn index(&self, r: $range) -> &Self::Output {
                &self.as_slice()[r]
            }
        }
        impl<T, const N: usize, P: Policy> IndexMut<$range> for BoundedVec<T, N, P> {
            fn index_mut(&mut self, r: $range) -> &mut Self::Output {
                &mut self.as_mut_slice()[r]
            }
        }
    )*};
}

index_ranges!(
    Range<usize>,
    RangeFrom<usize>,
    RangeTo<usize>,
    RangeToInclusive<usize>,
    RangeInclusive<usize>,
    RangeFull,
);
