// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::Policy, vec::BoundedVec};

// Core imports
use core::ptr;

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        let len = self.len;
        if at > len {
            return Err(Error::OutOfBounds { index: at, len });
        }

        let tail_len = len - at;
        let mut other = Self::new();
        self.len = at;
        // SAFETY: `buf[at..len]` is initialized and no longer covered by
        // `self.len`; the bytes move into `other`, which takes ownership by
        // covering exactly `tail_len` slots. The buffers never overlap.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr().add(at), other.buf.as_mut_ptr(), tail_len);
        }
        other.len = tail_len;

        Ok(other)
    }
}
