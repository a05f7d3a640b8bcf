// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Makes slot `len` live, holding `value`.
    ///
    /// The placeholder previously in the slot is dropped by the assignment.
    /// Panics on the slot index if the vector is full.
    #[inline]
    #[track_caller]
    pub(crate) fn construct_back(&mut self, value: T) {
        self.buf[self.len] = value;
        self.len += 1;
        self.extra = self.extra.saturating_sub(1);
    }
}
