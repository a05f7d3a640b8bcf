// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

impl<T: Default, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// Unlike [`pop_back`](Self::pop_back) this never consults the policy.
    /// The vacated slot keeps a `T::default()` placeholder.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        self.extra += 1;
        Some(core::mem::take(&mut self.buf[self.len]))
    }
}
