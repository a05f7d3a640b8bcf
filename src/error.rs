// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `BoundedVec`.
//!
//! These errors represent capacity, emptiness and bounds conditions. They are
//! `Copy` and implement `core::error::Error`.
//!
//! Which of them an operation actually reports depends on the vector's
//! [`Policy`](crate::Policy): only [`Checked`](crate::Checked) surfaces
//! [`Error::Full`] and [`Error::Empty`]; [`BoundedVec::at`](crate::BoundedVec::at)
//! and the conversions report the others regardless of policy.

// External imports
use thiserror::Error;

/// Errors returned by operations on [`BoundedVec`](crate::BoundedVec).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    #[error("capacity exceeded: requested {requested}, available {available}")]
    Full {
        /// Number of slots the operation needed.
        requested: usize,
        /// Number of free slots left.
        available: usize,
    },
    /// The operation needs at least one element.
    #[error("vector is empty")]
    Empty,
    /// An index or position was out of the current logical bounds.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds {
        /// Requested position.
        index: usize,
        /// Logical length at the time of the call.
        len: usize,
    },
    /// An operation required a specific length.
    ///
    /// Currently used by [`BoundedVec::try_into_array`](crate::BoundedVec::try_into_array)
    /// when the vector is not full.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLen {
        /// Length the operation needed.
        expected: usize,
        /// Length the vector had.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfBounds { index: 4, len: 2 });
        assert!(s.contains("out of bounds"));
        assert!(s.contains('4'));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::Full { requested: 3, available: 1 }.to_string(),
            "capacity exceeded: requested 3, available 1"
        );
        assert_eq!(Error::Empty.to_string(), "vector is empty");
        assert_eq!(
            Error::InvalidLen { expected: 4, actual: 2 }.to_string(),
            "invalid length: expected 4, got 2"
        );
    }
}
