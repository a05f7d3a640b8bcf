// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::{array, iter::FusedIterator, iter::Take};

/// Owned iterator returned by `BoundedVec::into_iter()`.
///
/// Yields the live elements by value from front to back and supports
/// double-ended iteration. The placeholders past the live prefix are dropped
/// with the iterator.
pub struct IntoIter<T, const N: usize> {
    pub(crate) inner: Take<array::IntoIter<T, N>>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize, P: Policy> IntoIterator for BoundedVec<T, N, P> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        IntoIter {
            inner: self.buf.into_iter().take(len),
        }
    }
}
