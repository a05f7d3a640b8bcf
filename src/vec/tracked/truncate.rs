// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    policy::Policy,
    vec::{BoundedVec, Element},
};

impl<T: Element, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Drops the last `count` live elements, leaving `T::default()` in their
    /// slots.
    ///
    /// `len` is lowered first; the vacated slots are counted by `extra`.
    #[inline]
    pub(crate) fn destroy_back(&mut self, count: usize) {
        debug_assert!(count <= self.len);
        let old_len = self.len;
        self.len -= count;
        self.extra += count;
        for slot in &mut self.buf[self.len..old_len] {
            *slot = T::default();
        }
    }
}
