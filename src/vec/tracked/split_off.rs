// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::Policy, vec::BoundedVec};

impl<T: Default, const N: usize, P: Policy> BoundedVec<T, N, P> {
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

        let mut other = Self::default();
        for slot in &mut self.buf[at..len] {
            other.construct_back(core::mem::take(slot));
        }
        self.destroy_back(len - at);

        Ok(other)
    }
}
