// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, policy::Policy, vec::BoundedVec};

// Core imports
use core::{mem::ManuallyDrop, ptr};

impl<T, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// Converts to `[T; N]` when **full** (`len == N`), otherwise returns [`Error::InvalidLen`].
    ///
    /// On error the vector is dropped with its elements.
    #[inline]
    pub fn try_into_array(self) -> Result<[T; N], Error> {
        if self.len != N {
            return Err(Error::InvalidLen {
                expected: N,
                actual: self.len,
            });
        }

        let this = ManuallyDrop::new(self);
        // SAFETY: `len == N`, so every slot is initialized. `[MaybeUninit<T>; N]`
        // and `[T; N]` have the same layout, and `this` is never dropped, so each
        // element changes owner exactly once.
        Ok(unsafe { ptr::read(this.buf.as_ptr() as *const [T; N]) })
    }
}
