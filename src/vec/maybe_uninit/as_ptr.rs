// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized as `T`. Code that
    /// dereferences this pointer must:
    ///
    /// - treat `self.len` as the number of initialized elements, and
    /// - avoid reading from `ptr.add(i)` for any `i >= self.len`.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Writing past `len` does **not** update `len`; such values are neither
    /// visible nor dropped by the vector.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }
}
