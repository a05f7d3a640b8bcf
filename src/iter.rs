// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`BoundedVec`](crate::BoundedVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&BoundedVec` and `&mut BoundedVec` iterate as slices (use `.rev()` for
//!   reverse order).
//! - `FromIterator` keeps the first `N` items.

#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod tracked;

#[cfg(feature = "unsafe-maybe-uninit")]
pub use maybe_uninit::IntoIter;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub use tracked::IntoIter;

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

impl<'a, T, const N: usize, P: Policy> IntoIterator for &'a BoundedVec<T, N, P> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize, P: Policy> IntoIterator for &'a mut BoundedVec<T, N, P> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T, const N: usize, P: Policy> FromIterator<T> for BoundedVec<T, N, P>
where
    Self: Default,
{
    /// Collecting into `BoundedVec<T, N, P>` takes at most the first `N` elements from the
    /// iterator and does not consume any further elements. The policy is not consulted;
    /// use [`BoundedVec::try_from_iter`] to detect overflow.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::default();
        v.extend(iter);
        v
    }
}
