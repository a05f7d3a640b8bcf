// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`BoundedVec`](crate::BoundedVec).
//!
//! - **Serialize**: as a sequence of the live elements (length `len`).
//! - **Deserialize**: from any sequence of at most `N` elements. A longer
//!   sequence is an error whatever the vector's policy, since silently
//!   dropping input would hide corrupt data.
//!
//! In the default backend `T: Default` is required (the buffer is filled
//! eagerly); with `unsafe-maybe-uninit` elements are written into the
//! uninitialized buffer as they are deserialized.

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize, const N: usize, P: Policy> Serialize for BoundedVec<T, N, P> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.as_slice())
    }
}

struct VecVisitor<T, const N: usize, P>(PhantomData<(T, P)>);

impl<'de, T, const N: usize, P: Policy> de::Visitor<'de> for VecVisitor<T, N, P>
where
    T: Deserialize<'de>,
    BoundedVec<T, N, P>: Default,
{
    type Value = BoundedVec<T, N, P>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = BoundedVec::<T, N, P>::default();
        while let Some(elem) = a.next_element::<T>()? {
            if out.is_full() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            out.shove_back(elem);
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize, P: Policy> Deserialize<'de> for BoundedVec<T, N, P>
where
    T: Deserialize<'de>,
    Self: Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N, P>(PhantomData))
    }
}
