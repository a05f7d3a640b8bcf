// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::{
    iter::FusedIterator,
    mem::{ManuallyDrop, MaybeUninit},
    ptr,
};

/// Owned iterator returned by `BoundedVec::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration. Elements not yet yielded are dropped with the iterator.
pub struct IntoIter<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) front: usize,
    pub(crate) back: usize, // exclusive
}

// Invariant: `buf[front..back]` are initialized and owned by the iterator;
// everything else has been moved out or was never initialized.
impl<T, const N: usize> IntoIter<T, N> {
    /// Drops `buf[start..start + count]`.
    ///
    /// # Safety
    ///
    /// The range must be initialized and already excluded from `front..back`.
    unsafe fn drop_range(&mut self, start: usize, count: usize) {
        let ptr = self.buf.as_mut_ptr().add(start) as *mut T;
        ptr::drop_in_place(ptr::slice_from_raw_parts_mut(ptr, count));
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was in `front..back`, so it is initialized and now
            // excluded from the owned range; it is read exactly once.
            Some(unsafe { self.buf[i].assume_init_read() })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        let start = self.front;
        self.front += skip;
        // SAFETY: `start..start + skip` was inside `front..back` and has just
        // been excluded from it.
        unsafe { self.drop_range(start, skip) };
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: the old `back - 1` was initialized and is now excluded.
            Some(unsafe { self.buf[self.back].assume_init_read() })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let skip = n.min(self.back - self.front);
        self.back -= skip;
        let start = self.back;
        // SAFETY: `start..start + skip` was inside `front..back` and has just
        // been excluded from it.
        unsafe { self.drop_range(start, skip) };
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        let (start, count) = (self.front, self.back - self.front);
        self.front = self.back;
        // SAFETY: `start..start + count` was the owned range, now emptied.
        unsafe { self.drop_range(start, count) };
    }
}

impl<T, const N: usize, P: Policy> IntoIterator for BoundedVec<T, N, P> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: `this` is never dropped, so ownership of `buf[..len]`
            // passes to the iterator exactly once.
            buf: unsafe { ptr::read(&this.buf) },
            front: 0,
            back: this.len,
        }
    }
}
