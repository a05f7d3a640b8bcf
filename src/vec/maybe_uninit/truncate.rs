// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::{mem::needs_drop, ptr};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Drops the last `count` live elements in place.
    #[inline]
    pub(crate) fn destroy_back(&mut self, count: usize) {
        debug_assert!(count <= self.len);
        let new_len = self.len - count;
        let tail: *mut [T] = &mut self.as_mut_slice()[new_len..];
        self.len = new_len;
        if needs_drop::<T>() {
            // SAFETY: `tail` covers `buf[new_len..old_len]`, which was initialized.
            // `len` already excludes it, so nothing can observe or drop it again.
            unsafe { ptr::drop_in_place(tail) };
        }
    }
}
