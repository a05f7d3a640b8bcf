// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `BoundedVec` type and its inherent API.
//!
//! `BoundedVec<T, N, P>` is a fixed-capacity vector for arbitrary element types.
//! It stores elements inline in a fixed-size backing buffer and tracks a logical
//! length. Methods generally mirror slice/vector semantics, with capacity
//! conditions routed through the error [`Policy`] `P`.
//!
//! The storage backend modules (`tracked`, `maybe_uninit`) provide the slot
//! primitives every other operation is built from:
//!
//! - `construct_back(value)`: bring slot `len` to life holding `value`
//!   (requires `len < N`);
//! - `destroy_back(count)`: drop the last `count` live elements;
//! - `as_slice` / `as_mut_slice`: view the live prefix.
//!
//! No heap allocations are performed.

#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;
#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod tracked;

mod assign;
mod cmp;
mod convert;
mod erase;
mod extend;
mod insert;

// Crate imports
use crate::{
    error::Error,
    policy::{Ignore, Policy},
};

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    marker::PhantomData,
    ops::{Bound, Deref, DerefMut, RangeBounds},
};

/// A fixed-capacity, inline vector.
///
/// `BoundedVec<T, N, P>` stores up to `N` elements inline and tracks a logical
/// length `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the buffer is stored inline (typically on the stack), no heap allocation;
/// - any element type is supported, including types with destructors;
/// - capacity overflow and empty pops are handled by the policy `P`
///   (default [`Ignore`]), see [`crate::policy`].
///
/// # Layout and invariants
///
/// - a backing buffer of capacity `N`;
/// - a logical length `len` with `0 <= len <= N`. Only `buf[..len]` is visible
///   through the API ([`as_slice`](Self::as_slice), indexing, iteration).
///
/// The **default (tracked) backend** stores `[T; N]` and never treats memory as
/// untyped: every slot always holds some valid `T`. A removed element (by
/// [`pop_back`](Self::pop_back), [`clear`](Self::clear), [`erase`](Self::erase),
/// ...) is dropped at once and a `T::default()` placeholder takes its slot.
/// Slots that were live and now hold such a placeholder are counted by
/// [`extra_initialized`](Self::extra_initialized); `len + extra_initialized() <= N`
/// always holds.
///
/// The **`unsafe-maybe-uninit` backend** stores `[MaybeUninit<T>; N]`, writes new
/// elements in place and drops removed ones where they lie. `extra_initialized()`
/// is always `0` there.
///
/// Both backends expose identical contents for every sequence of operations and
/// drop every removed element at the same point.
///
/// # Element and trait bounds
///
/// - In the default backend, operations that create a fresh buffer (`new`,
///   `Default`, `FromIterator`, `Clone`, ...) or vacate a slot (`pop`,
///   `pop_back`, `clear`, `erase`, `split_off`, ...) require `T: Default`,
///   spelled [`Element`] where the code is shared by both backends.
/// - With `unsafe-maybe-uninit`, none of them require `T: Default`.
/// - [`from_array`](Self::from_array) and
///   [`from_array_len`](Self::from_array_len) are `const fn` in both backends.
///
/// # Examples
///
/// ```rust
/// use bounded_stack_vec::{BoundedVec, Checked, Error};
///
/// let mut v: BoundedVec<String, 2, Checked> = BoundedVec::new();
/// v.push_back(String::from("a")).unwrap();
/// v.push_back(String::from("b")).unwrap();
/// assert_eq!(
///     v.push_back(String::from("c")),
///     Err(Error::Full { requested: 1, available: 0 })
/// );
/// assert_eq!(v.as_slice(), ["a", "b"]);
/// ```
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub struct BoundedVec<T, const N: usize, P: Policy = Ignore> {
    pub(crate) buf: [T; N],
    pub(crate) len: usize,
    pub(crate) extra: usize,
    pub(crate) _policy: PhantomData<P>,
}
#[cfg(feature = "unsafe-maybe-uninit")]
pub struct BoundedVec<T, const N: usize, P: Policy = Ignore> {
    pub(crate) buf: [core::mem::MaybeUninit<T>; N],
    pub(crate) len: usize,
    pub(crate) _policy: PhantomData<P>,
}

/// Element types the active storage backend can remove in place.
///
/// In the default backend every slot must hold a `T` at all times, so a
/// removed element is dropped by writing `T::default()` over it: the trait is
/// implemented for every `T: Default`. With `unsafe-maybe-uninit` it is
/// implemented for every type.
///
/// Operations that destroy elements without handing them back (`pop_back`,
/// `clear`, `truncate`, `erase`, `retain`, the assign family, ...) require it.
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub trait Element: Default {}
#[cfg(not(feature = "unsafe-maybe-uninit"))]
impl<T: Default> Element for T {}

/// Element types the active storage backend can remove in place.
///
/// With `unsafe-maybe-uninit` removed elements are dropped where they lie, so
/// this is implemented for every type. The default backend requires
/// `T: Default` instead.
#[cfg(feature = "unsafe-maybe-uninit")]
pub trait Element {}
#[cfg(feature = "unsafe-maybe-uninit")]
impl<T> Element for T {}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Same as [`capacity`](Self::capacity): a bounded vector can never hold more than `N`.
    #[inline]
    pub const fn max_size(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that fit.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use [`first`](slice::first) for the
    /// `Option` form.
    #[inline]
    #[track_caller]
    pub fn front(&self) -> &T {
        debug_assert!(self.len > 0, "front() on empty BoundedVec");
        &self.as_slice()[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty. Use [`last`](slice::last) for the
    /// `Option` form.
    #[inline]
    #[track_caller]
    pub fn back(&self) -> &T {
        debug_assert!(self.len > 0, "back() on empty BoundedVec");
        &self.as_slice()[self.len.wrapping_sub(1)]
    }

    /// Mutable [`front`](Self::front).
    #[inline]
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        debug_assert!(self.len > 0, "front_mut() on empty BoundedVec");
        &mut self.as_mut_slice()[0]
    }

    /// Mutable [`back`](Self::back).
    #[inline]
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        debug_assert!(self.len > 0, "back_mut() on empty BoundedVec");
        let last = self.len.wrapping_sub(1);
        &mut self.as_mut_slice()[last]
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }

    /// Number of free slots `requested` items may occupy, after consulting the
    /// policy when they do not all fit.
    #[inline]
    pub(crate) fn admit(&self, requested: usize) -> Result<usize, Error> {
        let available = N - self.len;
        if requested <= available {
            Ok(requested)
        } else {
            P::overflow(requested, available)
        }
    }

    /// Appends items while there is room.
    ///
    /// Returns `true` if the iterator still had items once the vector was full
    /// (one of them has been consumed and dropped to find out).
    pub(crate) fn push_while_room<I: Iterator<Item = T>>(&mut self, iter: &mut I) -> bool {
        loop {
            if self.len == N {
                return iter.next().is_some();
            }
            match iter.next() {
                Some(item) => self.construct_back(item),
                None => return false,
            }
        }
    }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Appends `value`.
    ///
    /// When the vector is full the policy decides: `value` is dropped
    /// ([`Ignore`], [`Saturate`](crate::Saturate)), the call panics
    /// ([`Panic`](crate::Panic)) or [`Error::Full`] is returned
    /// ([`Checked`](crate::Checked)).
    #[inline]
    pub fn push_back(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            P::overflow(1, 0)?;
            return Ok(());
        }
        self.construct_back(value);
        Ok(())
    }

    /// Constructs a new last element from `f` and returns a reference to it.
    ///
    /// `f` is only called when there is room. Returns `Ok(None)` when the vector
    /// was full and the policy absorbed the overflow.
    #[inline]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, f: F) -> Result<Option<&mut T>, Error> {
        if self.len == N {
            P::overflow(1, 0)?;
            return Ok(None);
        }
        self.construct_back(f());
        Ok(self.as_mut_slice().last_mut())
    }

    /// Appends `value` without consulting the policy.
    ///
    /// The caller guarantees `!self.is_full()`. Violating that is a bug: it
    /// trips a debug assertion, and in release builds panics on the slot index.
    /// It never corrupts the vector.
    #[inline]
    #[track_caller]
    pub fn shove_back(&mut self, value: T) {
        debug_assert!(self.len < N, "shove_back() on full BoundedVec");
        self.construct_back(value);
    }
}

impl<T: Element, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Destroys the last element.
    ///
    /// On an empty vector the policy decides (no-op by default). Use
    /// `pop` to move the element out instead.
    #[inline]
    pub fn pop_back(&mut self) -> Result<(), Error> {
        if self.len == 0 {
            return P::empty();
        }
        self.destroy_back(1);
        Ok(())
    }

    /// Removes every element.
    ///
    /// Every element is dropped before this returns, in both backends.
    #[inline]
    pub fn clear(&mut self) {
        self.destroy_back(self.len);
    }

    /// Shrinks to `new_len` if `new_len < len`; otherwise a no-op.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.destroy_back(self.len - new_len);
        }
    }

    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Growing past `N` consults the policy before any change.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        let count = self.admit(new_len - self.len)?;
        for _ in 0..count {
            self.construct_back(value.clone());
        }
        Ok(())
    }

    /// Resizes to `new_len`, filling with values returned by `f` when growing.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), Error> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        let count = self.admit(new_len - self.len)?;
        for _ in 0..count {
            self.construct_back(f());
        }
        Ok(())
    }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Exchanges the contents of `self` and `other`.
    ///
    /// Rust moves are plain byte copies for every `T`, so this swaps the
    /// buffers and counters directly, whatever the element type.
    #[inline]
    pub fn swap_contents(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}

/// Resolves `range` against `len` with `Vec::drain` semantics.
#[track_caller]
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> (usize, usize) {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i + 1,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i + 1,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };

    if start > end {
        panic!("range start > end: {} > {}", start, end);
    }
    if end > len {
        panic!("range end {} exceeds length {}", end, len);
    }
    (start, end)
}

impl<T: fmt::Debug, const N: usize, P: Policy> fmt::Debug for BoundedVec<T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Clone + Element, const N: usize, P: Policy> Clone for BoundedVec<T, N, P> {
    fn clone(&self) -> Self {
        let mut out = Self::default();
        for item in self.iter() {
            out.construct_back(item.clone());
        }
        out
    }

    /// Overwrites live elements in place and only constructs or destroys the
    /// difference in length.
    fn clone_from(&mut self, source: &Self) {
        let _ = self.assign_from_slice(source.as_slice());
    }
}

impl<T, const N: usize, P: Policy> Deref for BoundedVec<T, N, P> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize, P: Policy> DerefMut for BoundedVec<T, N, P> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize, P: Policy> AsRef<[T]> for BoundedVec<T, N, P> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize, P: Policy> AsMut<[T]> for BoundedVec<T, N, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
impl<T, const N: usize, P: Policy> Borrow<[T]> for BoundedVec<T, N, P> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize, P: Policy> BorrowMut<[T]> for BoundedVec<T, N, P> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
