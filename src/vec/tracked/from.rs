// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::marker::PhantomData;

impl<T, const N: usize, P: Policy> From<[T; N]> for BoundedVec<T, N, P> {
    fn from(buf: [T; N]) -> Self {
        Self::from_array(buf)
    }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Constructs a full vector from `buf`. Usable in constants.
    #[inline]
    pub const fn from_array(buf: [T; N]) -> Self {
        Self {
            buf,
            len: N,
            extra: 0,
            _policy: PhantomData,
        }
    }

    /// Constructs a vector whose live elements are `buf[..len]`. Usable in
    /// constants.
    ///
    /// `buf[len..]` stay in the buffer as placeholders.
    ///
    /// # Panics
    ///
    /// Panics if `len > N`.
    #[inline]
    pub const fn from_array_len(buf: [T; N], len: usize) -> Self
    where
        T: Copy,
    {
        assert!(len <= N, "from_array_len: len exceeds capacity");
        Self {
            buf,
            len,
            extra: 0,
            _policy: PhantomData,
        }
    }

    /// Re-tags the vector with another policy. Elements are not touched.
    #[inline]
    pub fn into_policy<Q: Policy>(self) -> BoundedVec<T, N, Q> {
        let Self { buf, len, extra, .. } = self;
        BoundedVec {
            buf,
            len,
            extra,
            _policy: PhantomData,
        }
    }
}
