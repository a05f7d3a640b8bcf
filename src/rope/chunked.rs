// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{rope::index_out_of_bounds, trace::event, vec::BoundedVec};

// Alloc imports
use alloc::{boxed::Box, vec::Vec};

// Core imports
use core::{
    fmt,
    iter::{FlatMap, FusedIterator},
    ops::{Index, IndexMut},
    slice,
};

/// Append-only sequence of fixed-width [`BoundedVec<T, W>`] chunks.
///
/// Every chunk except possibly the last is full, so element `pos` lives in
/// chunk `pos / W` at offset `pos % W`. Chunks are boxed: growing the chain
/// never moves elements. `W` must be non-zero (checked at compile time).
///
/// ```rust
/// use bounded_stack_vec::ChunkedRope;
///
/// let rope: ChunkedRope<i32, 4> = (0..10).collect();
/// let lens: Vec<usize> = rope.chunks().map(|c| c.len()).collect();
/// assert_eq!(lens, [4, 4, 2]);
/// assert_eq!(rope[7], 7);
/// ```
pub struct ChunkedRope<T, const W: usize> {
    chunks: Vec<Box<BoundedVec<T, W>>>,
    len: usize,
}

impl<T, const W: usize> ChunkedRope<T, W> {
    /// Creates an empty rope. Nothing is allocated until the first push.
    #[inline]
    pub const fn new() -> Self {
        const { assert!(W > 0, "chunk width must be non-zero") };
        Self {
            chunks: Vec::new(),
            len: 0,
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

    /// `chunk_count() * W`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.chunks.len() * W
    }

    /// Number of allocated chunks.
    #[inline]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Iterates over the chunks as slices, in order.
    pub fn chunks(&self) -> impl DoubleEndedIterator<Item = &[T]> + ExactSizeIterator + '_ {
        self.chunks.iter().map(|chunk| chunk.as_slice())
    }

    /// Returns the element at `pos` in `O(1)`.
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&T> {
        if pos >= self.len {
            return None;
        }
        self.chunks[pos / W].get(pos % W)
    }

    /// Mutable [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, pos: usize) -> Option<&mut T> {
        if pos >= self.len {
            return None;
        }
        self.chunks[pos / W].get_mut(pos % W)
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
    pub fn iter(&self) -> ChunkedIter<'_, T, W> {
        let as_slice: fn(&Box<BoundedVec<T, W>>) -> &[T] = |chunk| chunk.as_slice();
        ChunkedIter {
            inner: self.chunks.iter().flat_map(as_slice),
            remaining: self.len,
        }
    }

    /// Drops every element and releases every chunk.
    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }
}

impl<T, const W: usize> ChunkedRope<T, W>
where
    BoundedVec<T, W>: Default,
{
    /// Appends `value` and returns a reference to it.
    #[inline]
    pub fn push_back(&mut self, value: T) -> &mut T {
        self.emplace_back(|| value)
    }

    /// Appends the value returned by `f` and returns a reference to it.
    ///
    /// Allocates a new chunk first if the last one is full.
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        if self.chunks.last().map_or(true, |chunk| chunk.is_full()) {
            self.chunks.push(Box::default());
            let (width, capacity) = (W, self.capacity());
            event!(trace, "rope chunk allocated", width, capacity);
        }
        let last = self.chunks.len() - 1;
        let chunk = &mut self.chunks[last];
        chunk.shove_back(f());
        self.len += 1;
        chunk.back_mut()
    }
}

impl<T, const W: usize> Default for ChunkedRope<T, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const W: usize> Clone for ChunkedRope<T, W>
where
    BoundedVec<T, W>: Clone,
{
    fn clone(&self) -> Self {
        Self {
            chunks: self.chunks.clone(),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug, const W: usize> fmt::Debug for ChunkedRope<T, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const W: usize> PartialEq for ChunkedRope<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq, const W: usize> Eq for ChunkedRope<T, W> {}

impl<T, const W: usize> Index<usize> for ChunkedRope<T, W> {
    type Output = T;
    #[track_caller]
    fn index(&self, pos: usize) -> &T {
        match self.get(pos) {
            Some(item) => item,
            None => index_out_of_bounds(pos, self.len),
        }
    }
}
impl<T, const W: usize> IndexMut<usize> for ChunkedRope<T, W> {
    #[track_caller]
    fn index_mut(&mut self, pos: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(pos) {
            Some(item) => item,
            None => index_out_of_bounds(pos, len),
        }
    }
}

impl<T, const W: usize> Extend<T> for ChunkedRope<T, W>
where
    BoundedVec<T, W>: Default,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T, const W: usize> FromIterator<T> for ChunkedRope<T, W>
where
    BoundedVec<T, W>: Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut rope = Self::new();
        rope.extend(iter);
        rope
    }
}

impl<'a, T, const W: usize> IntoIterator for &'a ChunkedRope<T, W> {
    type Item = &'a T;
    type IntoIter = ChunkedIter<'a, T, W>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

type ChunkSlices<'a, T, const W: usize> =
    FlatMap<slice::Iter<'a, Box<BoundedVec<T, W>>>, &'a [T], fn(&Box<BoundedVec<T, W>>) -> &[T]>;

/// Borrowing iterator over a [`ChunkedRope`].
pub struct ChunkedIter<'a, T, const W: usize> {
    inner: ChunkSlices<'a, T, W>,
    remaining: usize,
}

impl<'a, T, const W: usize> Iterator for ChunkedIter<'a, T, W> {
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
impl<T, const W: usize> DoubleEndedIterator for ChunkedIter<'_, T, W> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}
impl<T, const W: usize> ExactSizeIterator for ChunkedIter<'_, T, W> {}
impl<T, const W: usize> FusedIterator for ChunkedIter<'_, T, W> {}
