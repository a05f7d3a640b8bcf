// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    policy::Policy,
    vec::{resolve_range, BoundedVec, Element},
};

// Core imports
use core::ops::RangeBounds;

impl<T: Element, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Destroys the element at `pos`, shifting later elements left.
    ///
    /// Returns `pos`, which now indexes the element that followed the erased
    /// one (or equals `len` if the last element was erased). `erase(len)` is
    /// a no-op returning `len`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn erase(&mut self, pos: usize) -> usize {
        let len = self.len;
        if pos > len {
            panic!("erase index (is {pos}) should be <= len (is {len})");
        }
        if pos == len {
            return len;
        }
        self.as_mut_slice()[pos..].rotate_left(1);
        self.destroy_back(1);
        pos
    }

    /// Destroys the elements in `range`, shifting later elements left.
    ///
    /// Returns the start of the range. An empty range leaves the vector
    /// unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// # Examples
    /// ```
    /// # use bounded_stack_vec::BoundedVec;
    /// let mut v: BoundedVec<_, 5> = [1, 2, 3, 4, 5].into();
    /// assert_eq!(v.erase_range(1..3), 1);
    /// assert_eq!(v, [1, 4, 5]);
    /// ```
    #[track_caller]
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> usize {
        let (start, end) = resolve_range(range, self.len);
        let count = end - start;
        if count > 0 {
            self.as_mut_slice()[start..].rotate_left(count);
            self.destroy_back(count);
        }
        start
    }

    /// Retains only the elements for which `f` returns `true`, preserving order.
    ///
    /// The predicate is applied to each element in order. Rejected elements
    /// are moved past the kept ones and destroyed at the end.
    #[inline]
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
        self.retain_mut(|x| f(x));
    }

    /// Like [`retain`](Self::retain), but `f` may mutate the elements.
    pub fn retain_mut<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let mut kept = 0;
        for read in 0..self.len {
            let slice = self.as_mut_slice();
            if f(&mut slice[read]) {
                if kept != read {
                    slice.swap(kept, read);
                }
                kept += 1;
            }
        }
        self.truncate(kept);
    }
}
