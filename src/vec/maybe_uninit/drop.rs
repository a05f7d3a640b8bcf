// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{policy::Policy, vec::BoundedVec};

impl<T, const N: usize, P: Policy> Drop for BoundedVec<T, N, P> {
    fn drop(&mut self) {
        self.destroy_back(self.len);
    }
}
