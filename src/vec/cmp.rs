// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comparisons over the live prefix.
//!
//! Equality and ordering ignore capacity and policy, so a
//! `BoundedVec<i32, 5>` compares directly with a `BoundedVec<i32, 10, Checked>`.

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

impl<T, U, const N: usize, const M: usize, P: Policy, Q: Policy> PartialEq<BoundedVec<U, M, Q>>
    for BoundedVec<T, N, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &BoundedVec<U, M, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize, P: Policy> Eq for BoundedVec<T, N, P> {}

impl<T, U, const N: usize, P: Policy> PartialEq<[U]> for BoundedVec<T, N, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize, P: Policy> PartialEq<&[U]> for BoundedVec<T, N, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize, const K: usize, P: Policy> PartialEq<[U; K]> for BoundedVec<T, N, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; K]) -> bool {
        self.as_slice() == &other[..]
    }
}

impl<T, const N: usize, const M: usize, P: Policy, Q: Policy> PartialOrd<BoundedVec<T, M, Q>>
    for BoundedVec<T, N, P>
where
    T: PartialOrd,
{
    fn partial_cmp(&self, other: &BoundedVec<T, M, Q>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize, P: Policy> Ord for BoundedVec<T, N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, const N: usize, P: Policy> Hash for BoundedVec<T, N, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{policy::Checked, BoundedVec};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<H: Hash>(h: &H) -> u64 {
        let mut s = DefaultHasher::new();
        h.hash(&mut s);
        s.finish()
    }

    #[test]
    fn test_equality_across_capacity_and_policy() {
        let a: BoundedVec<i32, 5> = BoundedVec::try_from(&[1, 2, 3][..]).unwrap();
        let b: BoundedVec<i32, 10, Checked> = BoundedVec::try_from(&[1, 2, 3][..]).unwrap();
        assert!(a == b);
        assert!(!(a != b));
        let c: BoundedVec<i32, 10> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        assert!(a != c);
    }

    #[test]
    fn test_lexicographic_ordering() {
        let a: BoundedVec<i32, 5> = BoundedVec::try_from(&[1, 2, 3][..]).unwrap();
        let b: BoundedVec<i32, 8> = BoundedVec::try_from(&[1, 2, 4][..]).unwrap();
        let prefix: BoundedVec<i32, 2> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(prefix < a);
        assert!(a >= a.clone());
    }

    #[test]
    fn test_ord_and_eq_on_same_type() {
        let mut vs: std::vec::Vec<BoundedVec<i32, 3>> = std::vec![
            BoundedVec::try_from(&[2][..]).unwrap(),
            BoundedVec::try_from(&[1, 9][..]).unwrap(),
            BoundedVec::new(),
        ];
        vs.sort();
        assert!(vs[0].is_empty());
        assert_eq!(vs[1], [1, 9]);
        assert_eq!(vs[2], [2]);
    }

    #[test]
    fn test_eq_with_slices_and_arrays() {
        let v: BoundedVec<i32, 4> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v, [1, 2]);
        assert_eq!(v, &[1, 2][..]);
        assert_ne!(v, [1, 2, 0]);
    }

    #[test]
    fn test_hash_ignores_vacated_slots() {
        let mut a: BoundedVec<i32, 4> = BoundedVec::try_from(&[1, 2, 3][..]).unwrap();
        a.pop_back().unwrap();
        let b: BoundedVec<i32, 4> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}
