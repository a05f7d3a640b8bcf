// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Writes `value` into slot `len` and makes it live.
    ///
    /// Panics on the slot index if the vector is full.
    #[inline]
    #[track_caller]
    pub(crate) fn construct_back(&mut self, value: T) {
        self.buf[self.len].write(value);
        self.len += 1;
    }
}
