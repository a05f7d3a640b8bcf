// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positional insertion.
//!
//! Every variant constructs the new elements in the slots just past the live
//! prefix and then rotates `[pos..len)` right, so the new run lands at `pos`
//! and the former tail follows it. `pos > len` panics.

// Crate imports
use crate::{
    error::Error,
    policy::Policy,
    vec::{BoundedVec, Element},
};

/// Truncates the vector back to `len` when dropped.
///
/// Holds the elements appended so far while user clones run, so a panicking
/// `Clone` leaves the vector as it was before the insertion.
struct Rollback<'a, T: Element, const N: usize, P: Policy> {
    vec: &'a mut BoundedVec<T, N, P>,
    len: usize,
}

impl<T: Element, const N: usize, P: Policy> Drop for Rollback<'_, T, N, P> {
    fn drop(&mut self) {
        self.vec.truncate(self.len);
    }
}

#[inline]
#[track_caller]
fn check_pos(pos: usize, len: usize) {
    if pos > len {
        panic!("insertion index (is {pos}) should be <= len (is {len})");
    }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Inserts `value` at `pos`, shifting later elements right.
    ///
    /// Returns `pos`. When the vector is full the policy decides, and on
    /// `Ok` the vector is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn insert(&mut self, pos: usize, value: T) -> Result<usize, Error> {
        check_pos(pos, self.len);
        if self.len == N {
            P::overflow(1, 0)?;
            return Ok(pos);
        }
        self.construct_back(value);
        self.as_mut_slice()[pos..].rotate_right(1);
        Ok(pos)
    }

    /// Constructs an element from `f` at `pos` and returns a reference to it.
    ///
    /// `f` is only called when there is room; `Ok(None)` means the policy
    /// absorbed the overflow. `emplace(len, f)` is [`emplace_back`](Self::emplace_back).
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn emplace<F: FnOnce() -> T>(&mut self, pos: usize, f: F) -> Result<Option<&mut T>, Error> {
        check_pos(pos, self.len);
        if pos == self.len {
            return self.emplace_back(f);
        }
        if self.len == N {
            P::overflow(1, 0)?;
            return Ok(None);
        }
        self.construct_back(f());
        let tail = &mut self.as_mut_slice()[pos..];
        tail.rotate_right(1);
        Ok(tail.first_mut())
    }

    /// Inserts `count` clones of `value` at `pos`.
    ///
    /// Capacity is checked before anything moves. Under [`Saturate`](crate::Saturate)
    /// only `spare_capacity()` clones are inserted. Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn insert_n(&mut self, pos: usize, count: usize, value: &T) -> Result<usize, Error>
    where
        T: Clone + Element,
    {
        check_pos(pos, self.len);
        let count = self.admit(count)?;
        if count == 0 {
            return Ok(pos);
        }
        let len = self.len;
        let mut guard = Rollback { vec: self, len };
        for _ in 0..count {
            guard.vec.construct_back(value.clone());
        }
        guard.vec.as_mut_slice()[pos..].rotate_right(count);
        guard.len = guard.vec.len;
        Ok(pos)
    }

    /// Inserts clones of `src` at `pos`.
    ///
    /// Capacity is checked before anything moves; if a clone panics the vector
    /// is restored to its previous contents. Under [`Saturate`](crate::Saturate)
    /// the leading `spare_capacity()` items of `src` are inserted. Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bounded_stack_vec::{BoundedVec, Saturate};
    ///
    /// let mut v: BoundedVec<i32, 5, Saturate> = BoundedVec::from_slice_truncated(&[1, 2, 3]);
    /// v.insert_from_slice(0, &[8, 9, 10]).unwrap();
    /// assert_eq!(v, [8, 9, 1, 2, 3]);
    /// ```
    #[track_caller]
    pub fn insert_from_slice(&mut self, pos: usize, src: &[T]) -> Result<usize, Error>
    where
        T: Clone + Element,
    {
        check_pos(pos, self.len);
        let count = self.admit(src.len())?;
        if count == 0 {
            return Ok(pos);
        }
        let len = self.len;
        let mut guard = Rollback { vec: self, len };
        for item in &src[..count] {
            guard.vec.construct_back(item.clone());
        }
        guard.vec.as_mut_slice()[pos..].rotate_right(count);
        guard.len = guard.vec.len;
        Ok(pos)
    }

    /// Inserts the items of `iter` at `pos`.
    ///
    /// Items are appended one by one while there is room, then rotated into
    /// place. If the iterator yields more than `spare_capacity()` items, the
    /// leading ones stay inserted and the policy is consulted afterwards.
    /// Returns `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len`.
    #[track_caller]
    pub fn insert_iter<I: IntoIterator<Item = T>>(
        &mut self,
        pos: usize,
        iter: I,
    ) -> Result<usize, Error> {
        check_pos(pos, self.len);
        let mut iter = iter.into_iter();
        let len = self.len;
        let overflowed = self.push_while_room(&mut iter);
        let inserted = self.len - len;
        self.as_mut_slice()[pos..].rotate_right(inserted);
        if overflowed {
            P::overflow(inserted + 1 + iter.size_hint().0, inserted)?;
        }
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        policy::{Checked, Ignore, Panic, Saturate},
        test_util::{Probe, Tally},
        BoundedVec, Error,
    };

    #[test]
    fn test_insert_front_middle_end() {
        let mut v: BoundedVec<i32, 6> = BoundedVec::try_from(&[2, 4][..]).unwrap();
        assert_eq!(v.insert(0, 1), Ok(0));
        assert_eq!(v.insert(2, 3), Ok(2));
        assert_eq!(v.insert(4, 5), Ok(4));
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn test_insert_past_len_panics() {
        let mut v: BoundedVec<i32, 4> = BoundedVec::try_from(&[1][..]).unwrap();
        let _ = v.insert(2, 0);
    }

    #[test]
    fn test_insert_on_full_per_policy() {
        let mut ignore: BoundedVec<i32, 2, Ignore> = BoundedVec::from([1, 2]);
        assert_eq!(ignore.insert(0, 0), Ok(0));
        assert_eq!(ignore, [1, 2]);

        let mut checked: BoundedVec<i32, 2, Checked> = BoundedVec::from([1, 2]);
        assert_eq!(
            checked.insert(1, 0),
            Err(Error::Full {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(checked, [1, 2]);
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_insert_on_full_panic_policy() {
        let mut v: BoundedVec<i32, 1, Panic> = BoundedVec::from([1]);
        let _ = v.insert(0, 0);
    }

    #[test]
    fn test_insert_at_end_equals_emplace_back() {
        let mut a: BoundedVec<i32, 4> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        let mut b = a.clone();
        a.insert(2, 3).unwrap();
        b.emplace_back(|| 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_emplace_returns_slot_at_pos() {
        let mut v: BoundedVec<i32, 4> = BoundedVec::try_from(&[1, 3][..]).unwrap();
        let slot = v.emplace(1, || 2).unwrap().unwrap();
        *slot *= 10;
        assert_eq!(v, [1, 20, 3]);
        let at_end = v.emplace(3, || 4).unwrap().unwrap();
        assert_eq!(*at_end, 4);
        assert!(v.emplace(0, || 0).unwrap().is_none());
        assert_eq!(v, [1, 20, 3, 4]);
    }

    #[test]
    fn test_insert_n() {
        let mut v: BoundedVec<i32, 6> = BoundedVec::try_from(&[1, 5][..]).unwrap();
        assert_eq!(v.insert_n(1, 3, &0), Ok(1));
        assert_eq!(v, [1, 0, 0, 0, 5]);
        assert_eq!(v.insert_n(5, 0, &9), Ok(5));
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn test_insert_n_overflow_per_policy() {
        let mut ignore: BoundedVec<i32, 4> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        ignore.insert_n(0, 3, &7).unwrap();
        assert_eq!(ignore, [1, 2]);

        let mut saturate: BoundedVec<i32, 4, Saturate> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        saturate.insert_n(1, 3, &7).unwrap();
        assert_eq!(saturate, [1, 7, 7, 2]);

        let mut checked: BoundedVec<i32, 4, Checked> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(
            checked.insert_n(1, 3, &7),
            Err(Error::Full {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(checked, [1, 2]);
    }

    #[test]
    fn test_insert_from_slice_saturates_with_leading_items() {
        let mut v: BoundedVec<i32, 5, Saturate> = BoundedVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.insert_from_slice(0, &[8, 9, 10]), Ok(0));
        assert_eq!(v, [8, 9, 1, 2, 3]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn test_insert_from_slice_on_full_saturate_is_unchanged() {
        let mut v: BoundedVec<i32, 5, Saturate> = BoundedVec::from([1, 2, 3, 4, 5]);
        v.insert_from_slice(0, &[8, 9, 10]).unwrap();
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_from_slice_checked_leaves_vec_untouched() {
        let mut v: BoundedVec<i32, 4, Checked> = BoundedVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(
            v.insert_from_slice(1, &[7, 8]),
            Err(Error::Full {
                requested: 2,
                available: 1
            })
        );
        assert_eq!(v, [1, 2, 3]);
        assert_eq!(v.insert_from_slice(3, &[4]), Ok(3));
        assert_eq!(v, [1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_from_slice_rolls_back_on_panicking_clone() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        #[derive(Debug, Default, PartialEq)]
        struct Bomb(u8);
        impl Clone for Bomb {
            fn clone(&self) -> Self {
                if self.0 == 0 {
                    panic!("boom");
                }
                Bomb(self.0)
            }
        }

        let mut v: BoundedVec<Bomb, 6> = BoundedVec::new();
        v.push_back(Bomb(1)).unwrap();
        v.push_back(Bomb(2)).unwrap();
        let src = [Bomb(7), Bomb(0), Bomb(9)];
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = v.insert_from_slice(1, &src);
        }));
        assert!(result.is_err());
        assert_eq!(v.as_slice(), &[Bomb(1), Bomb(2)]);
    }

    #[test]
    fn test_insert_iter_within_capacity() {
        let mut v: BoundedVec<i32, 6, Checked> = BoundedVec::try_from(&[1, 5][..]).unwrap();
        assert_eq!(v.insert_iter(1, 2..5), Ok(1));
        assert_eq!(v, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_iter_keeps_prefix_on_overflow() {
        let mut v: BoundedVec<i32, 4, Checked> = BoundedVec::try_from(&[1, 9][..]).unwrap();
        let err = v.insert_iter(1, [2, 3, 4, 5]).unwrap_err();
        assert_eq!(
            err,
            Error::Full {
                requested: 4,
                available: 2
            }
        );
        assert_eq!(v, [1, 2, 3, 9]);

        let mut ignore: BoundedVec<i32, 3> = BoundedVec::try_from(&[0][..]).unwrap();
        ignore.insert_iter(0, 1..10).unwrap();
        assert_eq!(ignore, [1, 2, 0]);
    }

    #[test]
    fn test_insert_iter_panic_policy_rotates_prefix_first() {
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let mut v: BoundedVec<i32, 4, Panic> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _ = v.insert_iter(1, [7, 8, 9]);
        }));
        assert!(result.is_err());
        assert_eq!(v, [1, 7, 8, 2]);
        assert!(v.is_full());
        assert!(v.len() + v.extra_initialized() <= v.capacity());
    }

    #[test]
    fn test_insert_drops_each_value_once() {
        let tally = Tally::default();
        {
            let mut v: BoundedVec<Probe, 3> = BoundedVec::new();
            v.push_back(tally.probe(1)).unwrap();
            v.insert(0, tally.probe(0)).unwrap();
            v.insert_iter(1, [tally.probe(5), tally.probe(6)]).unwrap();
            assert_eq!(v.iter().map(|p| p.id).collect::<std::vec::Vec<_>>(), [0, 5, 1]);
            assert_eq!(tally.dropped(), 1);
        }
        assert_eq!(tally.dropped(), 4);
    }
}
