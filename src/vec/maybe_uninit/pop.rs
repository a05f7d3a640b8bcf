// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Removes the last element and returns it, or `None` if empty.
    ///
    /// Unlike [`pop_back`](Self::pop_back) this never consults the policy.
    #[inline]
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: `buf[self.len]` was the last initialized element. `len` no
        // longer covers it, so ownership moves out exactly once.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }
}
