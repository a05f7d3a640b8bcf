// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::Policy, vec::BoundedVec};

impl<T, const N: usize, P: Policy> Extend<T> for BoundedVec<T, N, P> {
    /// Appends items until the vector is full; the rest are not consumed.
    ///
    /// This never consults the policy. Use
    /// [`extend_from_iter`](BoundedVec::extend_from_iter) for the policy-aware form.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            self.construct_back(item);
        }
    }
}

impl<'a, T: Clone + 'a, const N: usize, P: Policy> Extend<&'a T> for BoundedVec<T, N, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Appends `count` clones of `value`.
    ///
    /// If they do not all fit, the policy is consulted before any change.
    pub fn append_n(&mut self, count: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        let count = self.admit(count)?;
        for _ in 0..count {
            self.construct_back(value.clone());
        }
        Ok(())
    }

    /// Appends clones of `src`.
    ///
    /// If they do not all fit, the policy is consulted before any change.
    pub fn append_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let count = self.admit(src.len())?;
        for item in &src[..count] {
            self.construct_back(item.clone());
        }
        Ok(())
    }

    /// Copies as many elements from `src` as will fit and returns the count copied.
    ///
    /// Never consults the policy.
    #[inline]
    #[must_use]
    pub fn append_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = (N - self.len).min(src.len());
        for item in &src[..take] {
            self.construct_back(item.clone());
        }
        take
    }

    /// Appends the items of `iter`.
    ///
    /// Items are appended while there is room; if the iterator has more, the
    /// appended prefix stays and the policy is consulted afterwards.
    pub fn extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let mut iter = iter.into_iter();
        let len = self.len;
        if self.push_while_room(&mut iter) {
            let appended = self.len - len;
            P::overflow(appended + 1 + iter.size_hint().0, appended)?;
        }
        Ok(())
    }
}
