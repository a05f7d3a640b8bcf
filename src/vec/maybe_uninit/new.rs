// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::{marker::PhantomData, mem::MaybeUninit};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Constructs an empty vector without touching the buffer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
            _policy: PhantomData,
        }
    }

    /// Always `0`: removed elements are dropped immediately in this backend.
    #[inline]
    pub const fn extra_initialized(&self) -> usize {
        0
    }
}

impl<T, const N: usize, P: Policy> Default for BoundedVec<T, N, P> {
    fn default() -> Self {
        Self::new()
    }
}
