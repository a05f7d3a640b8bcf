// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::{
    marker::PhantomData,
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

impl<T, const N: usize, P: Policy> From<[T; N]> for BoundedVec<T, N, P> {
    fn from(src: [T; N]) -> Self {
        Self::from_array(src)
    }
}

/// Reinterprets `[T; N]` as `[MaybeUninit<T>; N]` in a `const` context.
#[inline]
const fn into_slots<T, const N: usize>(src: [T; N]) -> [MaybeUninit<T>; N] {
    let src = MaybeUninit::new(src);
    // SAFETY: `[T; N]` and `[MaybeUninit<T>; N]` have the same layout, and the
    // `MaybeUninit` wrapper never drops `src`, so each element moves once.
    unsafe { ptr::read(src.as_ptr().cast::<[MaybeUninit<T>; N]>()) }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Constructs a full vector from `src`. Usable in constants.
    #[inline]
    pub const fn from_array(src: [T; N]) -> Self {
        Self {
            buf: into_slots(src),
            len: N,
            _policy: PhantomData,
        }
    }

    /// Constructs a vector whose live elements are `src[..len]`. Usable in
    /// constants.
    ///
    /// `src[len..]` are discarded; `T: Copy` means they need no drop.
    ///
    /// # Panics
    ///
    /// Panics if `len > N`.
    #[inline]
    pub const fn from_array_len(src: [T; N], len: usize) -> Self
    where
        T: Copy,
    {
        assert!(len <= N, "from_array_len: len exceeds capacity");
        Self {
            buf: into_slots(src),
            len,
            _policy: PhantomData,
        }
    }

    /// Re-tags the vector with another policy. Elements are not touched.
    #[inline]
    pub fn into_policy<Q: Policy>(self) -> BoundedVec<T, N, Q> {
        let this = ManuallyDrop::new(self);
        BoundedVec {
            // SAFETY: `this` is never dropped, so the buffer (and the elements in
            // its live prefix) are moved out exactly once.
            buf: unsafe { ptr::read(&this.buf) },
            len: this.len,
            _policy: PhantomData,
        }
    }
}
