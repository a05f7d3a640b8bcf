// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::marker::PhantomData;

impl<T: Default, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Constructs an empty vector with every slot holding `T::default()`.
    ///
    /// This is `O(N)`: the whole buffer is written once.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T: Default, const N: usize, P: Policy> Default for BoundedVec<T, N, P> {
    fn default() -> Self {
        Self {
            buf: core::array::from_fn(|_| T::default()),
            len: 0,
            extra: 0,
            _policy: PhantomData,
        }
    }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Number of slots past `len` that held an element once and now hold a
    /// `T::default()` placeholder.
    ///
    /// `len() + extra_initialized() <= capacity()` always holds.
    #[inline]
    pub const fn extra_initialized(&self) -> usize {
        self.extra
    }
}
