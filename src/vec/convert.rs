// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    policy::Policy,
    vec::{BoundedVec, Element},
};

impl<T: Clone, const N: usize, P: Policy> TryFrom<&[T]> for BoundedVec<T, N, P>
where
    Self: Default,
{
    type Error = Error;

    /// Clones `src` into a new vector, or returns [`Error::Full`] if
    /// `src.len() > N`. Does not depend on the policy.
    fn try_from(src: &[T]) -> Result<Self, Error> {
        if src.len() > N {
            return Err(Error::Full {
                requested: src.len(),
                available: N,
            });
        }
        let mut v = Self::default();
        for item in src {
            v.construct_back(item.clone());
        }
        Ok(v)
    }
}

impl<T: Clone, const N: usize, P: Policy> From<&[T; N]> for BoundedVec<T, N, P> {
    fn from(src: &[T; N]) -> Self {
        src.clone().into()
    }
}

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P>
where
    Self: Default,
{
    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// `count > N` goes through the policy like [`assign_n`](Self::assign_n).
    pub fn from_elem(count: usize, value: &T) -> Result<Self, Error>
    where
        T: Clone + Element,
    {
        let mut v = Self::default();
        v.assign_n(count, value)?;
        Ok(v)
    }

    /// Constructs from at most `N` elements of `src`, truncating if necessary.
    #[inline]
    pub fn from_slice_truncated(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::default();
        let _ = v.append_from_slice_truncated(src);
        v
    }

    /// Constructs from at most `N` elements of `src`, truncating if necessary.
    ///
    /// Convenience wrapper over [`from_slice_truncated`](Self::from_slice_truncated) for arrays.
    #[inline]
    pub fn from_array_truncated<const M: usize>(src: &[T; M]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_truncated(&src[..])
    }

    /// Tries to construct from an iterator, erroring with [`Error::Full`] if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns `Err(Error::Full)`;
    ///   the elements collected so far are dropped.
    /// - The source iterator is consumed up to and including that element.
    ///
    /// Does not depend on the policy.
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut iter = iter.into_iter();
        let mut v = Self::default();
        if v.push_while_room(&mut iter) {
            return Err(Error::Full {
                requested: N + 1 + iter.size_hint().0,
                available: N,
            });
        }
        Ok(v)
    }

    /// Clones the elements of a smaller-or-equal capacity vector.
    ///
    /// `M <= N` is checked at compile time, so this cannot overflow.
    pub fn from_bounded<const M: usize, Q: Policy>(other: &BoundedVec<T, M, Q>) -> Self
    where
        T: Clone,
    {
        const { assert!(M <= N, "source capacity exceeds target capacity") };
        let mut v = Self::default();
        for item in other.iter() {
            v.construct_back(item.clone());
        }
        v
    }

    /// Moves the elements of a smaller-or-equal capacity vector.
    ///
    /// `M <= N` is checked at compile time, so this cannot overflow.
    pub fn from_bounded_owned<const M: usize, Q: Policy>(other: BoundedVec<T, M, Q>) -> Self {
        const { assert!(M <= N, "source capacity exceeds target capacity") };
        let mut v = Self::default();
        for item in other {
            v.construct_back(item);
        }
        v
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{
        policy::{Checked, Saturate},
        BoundedVec, Error,
    };
    use alloc::string::String;

    #[test]
    fn test_try_from_slice() {
        let v: BoundedVec<i32, 3> = BoundedVec::try_from(&[1, 2][..]).unwrap();
        assert_eq!(v, [1, 2]);
        let err = BoundedVec::<i32, 1>::try_from(&[1, 2][..]).unwrap_err();
        assert_eq!(
            err,
            Error::Full {
                requested: 2,
                available: 1
            }
        );
    }

    #[test]
    fn test_from_array_and_ref() {
        let v: BoundedVec<String, 2> = BoundedVec::from([String::from("a"), String::from("b")]);
        assert!(v.is_full());
        let arr = [1, 2, 3];
        let w: BoundedVec<i32, 3> = (&arr).into();
        assert_eq!(w, arr);
    }

    #[test]
    fn test_from_elem_per_policy() {
        let v = BoundedVec::<i32, 4>::from_elem(3, &5).unwrap();
        assert_eq!(v, [5, 5, 5]);
        let s = BoundedVec::<i32, 2, Saturate>::from_elem(3, &5).unwrap();
        assert_eq!(s, [5, 5]);
        assert!(BoundedVec::<i32, 2, Checked>::from_elem(3, &5).is_err());
    }

    #[test]
    fn test_from_slice_and_array_truncated() {
        let v = BoundedVec::<i32, 2>::from_slice_truncated(&[1, 2, 3]);
        assert_eq!(v, [1, 2]);
        let w = BoundedVec::<i32, 4>::from_array_truncated(&[7, 8]);
        assert_eq!(w, [7, 8]);
    }

    #[test]
    fn test_try_from_iter() {
        let ok = BoundedVec::<i32, 3>::try_from_iter(1..=3).unwrap();
        assert_eq!(ok, [1, 2, 3]);
        assert_eq!(
            BoundedVec::<i32, 3>::try_from_iter(0..5).unwrap_err(),
            Error::Full {
                requested: 5,
                available: 3
            }
        );
    }

    #[test]
    fn test_from_bounded_smaller_capacity() {
        let small: BoundedVec<String, 2, Checked> =
            BoundedVec::from([String::from("x"), String::from("y")]);
        let big: BoundedVec<String, 5> = BoundedVec::from_bounded(&small);
        assert_eq!(big, small);
        let moved: BoundedVec<String, 2> = BoundedVec::from_bounded_owned(small);
        assert_eq!(moved.as_slice(), ["x", "y"]);
    }
}
