// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free functions over [`BoundedVec`].

// Crate imports
use crate::{
    policy::Policy,
    vec::{BoundedVec, Element},
};

/// Removes every element equal to `value` and returns how many were removed.
pub fn erase<T: PartialEq + Element, const N: usize, P: Policy>(
    v: &mut BoundedVec<T, N, P>,
    value: &T,
) -> usize {
    erase_if(v, |x| x == value)
}

/// Removes every element matching `pred` and returns how many were removed.
///
/// Order of the remaining elements is preserved.
pub fn erase_if<T: Element, const N: usize, P: Policy, F: FnMut(&T) -> bool>(
    v: &mut BoundedVec<T, N, P>,
    mut pred: F,
) -> usize {
    let before = v.len();
    v.retain(|x| !pred(x));
    before - v.len()
}

/// Exchanges the contents of two vectors; same as [`BoundedVec::swap_contents`].
#[inline]
pub fn swap<T, const N: usize, P: Policy>(
    a: &mut BoundedVec<T, N, P>,
    b: &mut BoundedVec<T, N, P>,
) {
    a.swap_contents(b);
}

/// Concatenates clones of `lhs` and `rhs` into a vector of capacity `C`.
///
/// `C` must equal `A + B`; this is checked at compile time, so the result can
/// never overflow.
///
/// ```rust
/// use bounded_stack_vec::{append, BoundedVec};
///
/// let a: BoundedVec<i32, 2> = BoundedVec::from([1, 2]);
/// let b: BoundedVec<i32, 3> = BoundedVec::from_slice_truncated(&[3]);
/// let c: BoundedVec<i32, 5> = append(&a, &b);
/// assert_eq!(c, [1, 2, 3]);
/// ```
pub fn append<T: Clone, const A: usize, const B: usize, const C: usize, P: Policy>(
    lhs: &BoundedVec<T, A, P>,
    rhs: &BoundedVec<T, B, P>,
) -> BoundedVec<T, C, P>
where
    BoundedVec<T, C, P>: Default,
{
    const { assert!(C == A + B, "result capacity must equal the sum of both capacities") };
    let mut out = BoundedVec::<T, C, P>::default();
    for item in lhs.iter().chain(rhs.iter()) {
        out.construct_back(item.clone());
    }
    out
}
