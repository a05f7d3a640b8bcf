// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    policy::Policy,
    vec::{BoundedVec, Element},
};

impl<T: Element, const N: usize, P: Policy> BoundedVec<T, N, P> {
    /// How many of `requested` replacement items to keep, or `None` when the
    /// policy turned the replacement into a no-op.
    #[inline]
    fn admit_replacement(requested: usize) -> Result<Option<usize>, Error> {
        if requested <= N {
            return Ok(Some(requested));
        }
        match P::overflow(requested, N)? {
            0 => Ok(None),
            kept => Ok(Some(kept)),
        }
    }

    /// Replaces the contents with `count` clones of `value`.
    ///
    /// Live elements are overwritten with `clone_from`, missing ones are
    /// constructed and surplus ones destroyed. If `count > N` the policy is
    /// consulted before any change.
    pub fn assign_n(&mut self, count: usize, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        let Some(count) = Self::admit_replacement(count)? else {
            return Ok(());
        };
        let live = self.len.min(count);
        for slot in &mut self.as_mut_slice()[..live] {
            slot.clone_from(value);
        }
        for _ in live..count {
            self.construct_back(value.clone());
        }
        self.truncate(count);
        Ok(())
    }

    /// Replaces the contents with clones of `src`.
    ///
    /// Same discipline as [`assign_n`](Self::assign_n); under
    /// [`Saturate`](crate::Saturate) the first `N` items of `src` are kept.
    pub fn assign_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        let Some(count) = Self::admit_replacement(src.len())? else {
            return Ok(());
        };
        let src = &src[..count];
        let live = self.len.min(count);
        self.as_mut_slice()[..live].clone_from_slice(&src[..live]);
        for item in &src[live..] {
            self.construct_back(item.clone());
        }
        self.truncate(count);
        Ok(())
    }

    /// Replaces the contents with the items of `iter`.
    ///
    /// Items overwrite live elements first, then fill the remaining capacity.
    /// If the iterator holds more than `N` items, the first `N` are kept and the
    /// policy is consulted afterwards.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let mut iter = iter.into_iter();
        let mut written = 0;
        while written < self.len {
            match iter.next() {
                Some(item) => {
                    self.as_mut_slice()[written] = item;
                    written += 1;
                }
                None => {
                    self.truncate(written);
                    return Ok(());
                }
            }
        }
        if self.push_while_room(&mut iter) {
            P::overflow(N + 1 + iter.size_hint().0, N)?;
        }
        Ok(())
    }
}
