// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only chunked sequences.
//!
//! A rope is a chain of chunks that are allocated once and never reallocated,
//! so elements never move after being appended and references handed out by
//! [`Rope::push_back`] stay valid until the rope is mutated again. Two flavors:
//!
//! - [`Rope<T>`]: heap chunks whose widths grow geometrically (the first holds
//!   [`MIN_CHUNK_WIDTH`] elements, each later one twice the capacity so far).
//!   Indexing scans the chunks.
//! - [`ChunkedRope<T, W>`]: boxed [`BoundedVec<T, W>`](crate::BoundedVec)
//!   chunks of fixed width `W`. Indexing is `O(1)`.
//!
//! Only appending is supported; there is no insertion or removal in the middle.

mod chunked;

pub use chunked::{ChunkedIter, ChunkedRope};

// Crate imports
use crate::trace::event;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    fmt,
    iter::{Flatten, FusedIterator},
    ops::{Index, IndexMut},
    slice,
};

/// Width of the first chunk of a [`Rope`].
pub const MIN_CHUNK_WIDTH: usize = 8;

#[cold]
#[track_caller]
pub(crate) fn index_out_of_bounds(pos: usize, len: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {pos}")
}

/// Append-only sequence of geometrically growing chunks.
///
/// ```rust
/// use bounded_stack_vec::Rope;
///
/// let mut rope = Rope::new();
/// for i in 0..20 {
///     rope.push_back(i);
/// }
/// assert_eq!(rope.chunk_count(), 2);
/// assert_eq!(rope.capacity(), 8 + 16);
/// assert_eq!(rope[13], 13);
/// ```
pub struct Rope<T> {
    chunks: Vec<Vec<T>>,
    len: usize,
    capacity: usize,
    // Every chunk but the last is full, so only the last one's width is kept.
    tail_width: usize,
}

impl<T> Rope<T> {
    /// Creates an empty rope. Nothing is allocated until the first push.
    #[inline]
    pub const fn new() -> Self {
        Self {
            chunks: Vec::new(),
            len: 0,
            capacity: 0,
            tail_width: 0,
        }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the rope holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sum of the widths of all allocated chunks.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of allocated chunks.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates over the chunks as slices, in order.
    pub fn chunks(&self) -> impl DoubleEndedIterator<Item = &[T]> + ExactSizeIterator + '_ {
        self.chunks.iter().map(Vec::as_slice)
    }

    fn grow(&mut self) {
        let width = if self.capacity == 0 {
            MIN_CHUNK_WIDTH
        } else {
            self.capacity * 2
        };
        self.chunks.push(Vec::with_capacity(width));
        self.capacity += width;
        self.tail_width = width;
        let capacity = self.capacity;
        event!(trace, "rope chunk allocated", width, capacity);
    }

    /// Appends `value` and returns a reference to it.
    #[inline]
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.emplace_back(|| value)
    }

    /// Appends the value returned by `f` and returns a reference to it.
    ///
    /// Allocates a new chunk first if the last one is full.
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self
            .chunks
            .last()
            .map_or(true, |chunk| chunk.len() == self.tail_width)
        {
            self.grow();
        }
        let last = self.chunks.len() - 1;
        let chunk = &mut self.chunks[last];
        // Within the width reserved by `grow`, so this never reallocates.
        chunk.push(f());
        self.len += 1;
        let slot = chunk.len() - 1;
        &mut chunk[slot]
    }

    /// Returns the element at `pos`, scanning the chunks.
    pub fn get(&self, mut pos: usize) -> Option<&T> {
        for chunk in &self.chunks {
            if pos < chunk.len() {
                return Some(&chunk[pos]);
            }
            pos -= chunk.len();
        }
        None
    }

    /// Mutable [`get`](Self::get).
    pub fn get_mut(&mut self, mut pos: usize) -> Option<&mut T> {
        for chunk in &mut self.chunks {
            if pos < chunk.len() {
                return Some(&mut chunk[pos]);
            }
            pos -= chunk.len();
        }
        None
    }

    /// First element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.chunks.first().and_then(|chunk| chunk.first())
    }

    /// Last element, or `None` if empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.chunks.last().and_then(|chunk| chunk.last())
    }

    /// Mutable [`front`](Self::front).
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.chunks.first_mut().and_then(|chunk| chunk.first_mut())
    }

    /// Mutable [`back`](Self::back).
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.chunks.last_mut().and_then(|chunk| chunk.last_mut())
    }

    /// Iterates over the elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.chunks.iter().flatten(),
            remaining: self.len,
        }
    }

    /// Drops every element and releases every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
        self.capacity = 0;
        self.tail_width = 0;
    }
}

impl<T> Default for Rope<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Rope<T> {
    /// Clones into chunks of the same widths.
    fn clone(&self) -> Self {
        let last = self.chunks.len().saturating_sub(1);
        let chunks = self
            .chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| {
                let width = if i == last { self.tail_width } else { chunk.len() };
                let mut copy = Vec::with_capacity(width);
                copy.extend_from_slice(chunk);
                copy
            })
            .collect();
        Self {
            chunks,
            len: self.len,
            capacity: self.capacity,
            tail_width: self.tail_width,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Rope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Rope<T> {
    /// Element-wise; chunk layout is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for Rope<T> {}

impl<T> Index<usize> for Rope<T> {
    type Output = T;
    #[track_caller]
    fn index(&self, pos: usize) -> &T {
        match self.get(pos) {
            Some(item) => item,
            None => index_out_of_bounds(pos, self.len),
        }
    }
}
impl<T> IndexMut<usize> for Rope<T> {
    #[track_caller]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(pos) {
            Some(item) => item,
            None => index_out_of_bounds(pos, len),
        }
    }
}

impl<T> Extend<T> for Rope<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for Rope<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut rope = Self::new();
        rope.extend(iter);
        rope
    }
}

impl<'a, T> IntoIterator for &'a Rope<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`Rope`].
pub struct Iter<'a, T> {
    inner: Flatten<slice::Iter<'a, Vec<T>>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    // Imports
    use super::{Rope, MIN_CHUNK_WIDTH};
    use alloc::{format, string::String, vec::Vec};

    #[test]
    fn test_chunk_widths_grow_geometrically() {
        let mut rope = Rope::new();
        assert_eq!(rope.capacity(), 0);
        rope.push_back(0u32);
        assert_eq!(rope.capacity(), MIN_CHUNK_WIDTH);
        rope.extend(1..8);
        assert_eq!(rope.chunk_count(), 1);
        rope.push_back(8);
        assert_eq!(rope.chunk_count(), 2);
        assert_eq!(rope.capacity(), 24);
        rope.extend(9..25);
        assert_eq!(rope.chunk_count(), 3);
        assert_eq!(rope.capacity(), 72);
        let lens: Vec<usize> = rope.chunks().map(<[u32]>::len).collect();
        assert_eq!(lens, [8, 16, 1]);
        assert_eq!(rope.len(), 25);
    }

    #[test]
    fn test_indexing_scans_chunks() {
        let mut rope: Rope<usize> = (0..30).collect();
        for i in 0..30 {
            assert_eq!(rope[i], i);
        }
        rope[20] = 200;
        assert_eq!(rope.get(20), Some(&200));
        assert_eq!(rope.get(30), None);
        assert!(rope.get_mut(31).is_none());
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_index_past_len_panics() {
        let rope: Rope<u8> = (0..3).collect();
        let _ = rope[3];
    }

    #[test]
    fn test_elements_never_move() {
        let mut rope = Rope::new();
        let first: *const u64 = rope.push_back(1u64);
        for i in 0..500 {
            rope.push_back(i);
        }
        assert!(core::ptr::eq(first, &rope[0]));
    }

    #[test]
    fn test_front_back_and_empty() {
        let mut rope: Rope<String> = Rope::default();
        assert!(rope.front().is_none());
        assert!(rope.back_mut().is_none());
        rope.push_back(String::from("a"));
        rope.emplace_back(|| String::from("b")).push('!');
        assert_eq!(rope.front().map(String::as_str), Some("a"));
        assert_eq!(rope.back().map(String::as_str), Some("b!"));
        if let Some(f) = rope.front_mut() {
            f.push('?');
        }
        assert_eq!(rope[0], "a?");
    }

    #[test]
    fn test_iter_clone_eq_debug() {
        let rope: Rope<i32> = (0..10).collect();
        let copy = rope.clone();
        assert_eq!(rope, copy);
        assert_eq!(copy.capacity(), rope.capacity());
        assert_eq!(rope.iter().len(), 10);
        assert_eq!(rope.iter().rev().next(), Some(&9));
        assert_eq!((&rope).into_iter().sum::<i32>(), 45);
        let small: Rope<i32> = (0..3).collect();
        assert_eq!(format!("{small:?}"), "[0, 1, 2]");
    }

    #[test]
    fn test_clear_releases_chunks() {
        let mut rope: Rope<i32> = (0..20).collect();
        rope.clear();
        assert!(rope.is_empty());
        assert_eq!(rope.chunk_count(), 0);
        assert_eq!(rope.capacity(), 0);
        rope.push_back(7);
        assert_eq!(rope.capacity(), MIN_CHUNK_WIDTH);
    }
}
