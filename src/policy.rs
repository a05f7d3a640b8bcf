// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Overflow and empty-container policies.
//!
//! A [`BoundedVec<T, N, P>`](crate::BoundedVec) carries its error policy as the
//! zero-sized type parameter `P`. The policy is consulted whenever an operation
//! would exceed the fixed capacity or needs an element from an empty vector, and
//! decides between absorbing the condition and surfacing it:
//!
//! | Policy | capacity overflow | empty pop |
//! |---|---|---|
//! | [`Ignore`] (default) | the operation does nothing | nothing happens |
//! | [`Saturate`] | the operation fills the spare slots, dropping the excess | nothing happens |
//! | [`Panic`] | panic | panic |
//! | [`Checked`] | `Err(Error::Full { .. })` | `Err(Error::Empty)` |
//!
//! Operations whose input length is only known while consuming an iterator
//! (`insert_iter`, `assign_iter`, `extend_from_iter`) write the prefix that fits
//! first and consult the policy afterwards, so under every policy the vector
//! keeps that prefix.
//!
//! Since the policy is a type, selecting it costs nothing at runtime and
//! different vectors in one program may use different policies.

// Crate imports
use crate::{error::Error, trace::event};

mod sealed {
    pub trait Sealed {}
}

/// Runtime-inspectable name of a [`Policy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// See [`Ignore`].
    Ignore,
    /// See [`Saturate`].
    Saturate,
    /// See [`Panic`].
    Panic,
    /// See [`Checked`].
    Checked,
}

/// Strategy applied to capacity overflow and empty-container conditions.
///
/// This trait is sealed; the four implementations are [`Ignore`], [`Saturate`],
/// [`Panic`] and [`Checked`].
pub trait Policy: sealed::Sealed {
    /// Which strategy this is.
    const MODE: Mode;

    /// Called when an operation asks for `requested` slots while only
    /// `available < requested` are free.
    ///
    /// Returns how many of the requested items the operation may still write
    /// (`0` or `available`), or the error to hand back to the caller.
    fn overflow(requested: usize, available: usize) -> Result<usize, Error>;

    /// Called when an operation needs an element but the vector is empty.
    fn empty() -> Result<(), Error>;
}

/// Silently turn overflowing operations and empty pops into no-ops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ignore;

/// Let overflowing operations consume exactly the spare capacity and drop the
/// rest of their input.
///
/// The items kept are always the earliest ones of the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Saturate;

/// Panic on overflow and on empty pops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Panic;

/// Report overflow and empty pops as [`Err`] for callers that check results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Checked;

impl sealed::Sealed for Ignore {}
impl sealed::Sealed for Saturate {}
impl sealed::Sealed for Panic {}
impl sealed::Sealed for Checked {}

impl Policy for Ignore {
    const MODE: Mode = Mode::Ignore;

    #[inline]
    fn overflow(requested: usize, available: usize) -> Result<usize, Error> {
        event!(debug, "overflow ignored", requested, available);
        Ok(0)
    }

    #[inline]
    fn empty() -> Result<(), Error> {
        event!(debug, "empty pop ignored");
        Ok(())
    }
}

impl Policy for Saturate {
    const MODE: Mode = Mode::Saturate;

    #[inline]
    fn overflow(requested: usize, available: usize) -> Result<usize, Error> {
        event!(debug, "overflow saturated", requested, available);
        Ok(available)
    }

    #[inline]
    fn empty() -> Result<(), Error> {
        event!(debug, "empty pop ignored");
        Ok(())
    }
}

impl Policy for Panic {
    const MODE: Mode = Mode::Panic;

    #[cold]
    fn overflow(requested: usize, available: usize) -> Result<usize, Error> {
        panic!("bounded vector capacity exceeded: requested {requested}, available {available}")
    }

    #[cold]
    fn empty() -> Result<(), Error> {
        panic!("bounded vector is empty")
    }
}

impl Policy for Checked {
    const MODE: Mode = Mode::Checked;

    #[inline]
    fn overflow(requested: usize, available: usize) -> Result<usize, Error> {
        Err(Error::Full {
            requested,
            available,
        })
    }

    #[inline]
    fn empty() -> Result<(), Error> {
        Err(Error::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_admission_per_policy() {
        assert_eq!(Ignore::overflow(3, 1), Ok(0));
        assert_eq!(Saturate::overflow(3, 1), Ok(1));
        assert_eq!(
            Checked::overflow(3, 1),
            Err(Error::Full {
                requested: 3,
                available: 1
            })
        );
    }

    #[test]
    fn test_empty_per_policy() {
        assert_eq!(Ignore::empty(), Ok(()));
        assert_eq!(Saturate::empty(), Ok(()));
        assert_eq!(Checked::empty(), Err(Error::Empty));
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn test_panic_policy_overflow_panics() {
        let _ = Panic::overflow(2, 0);
    }

    #[test]
    #[should_panic(expected = "is empty")]
    fn test_panic_policy_empty_panics() {
        let _ = Panic::empty();
    }

    #[test]
    fn test_modes() {
        assert_eq!(Ignore::MODE, Mode::Ignore);
        assert_eq!(Saturate::MODE, Mode::Saturate);
        assert_eq!(Panic::MODE, Mode::Panic);
        assert_eq!(Checked::MODE, Mode::Checked);
    }
}
