// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::Policy, vec::BoundedVec};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns [`Error::InvalidLen`].
    #[inline]
    pub fn try_into_array(self) -> Result<[T; N], Error> {
        if self.len == N {
            Ok(self.buf)
        } else {
            Err(Error::InvalidLen {
                expected: N,
                actual: self.len,
            })
        }
    }
}
