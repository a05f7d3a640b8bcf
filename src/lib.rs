// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `bounded-stack-vec`
//!
//! A `no_std`, fixed-capacity, inline vector for **any** element type, with a
//! compile-time selectable policy for capacity overflow, plus append-only
//! chunked ropes built on top of it.
//!
//! The core type, [`BoundedVec<T, N, P>`], stores up to `N` elements inline
//! (no heap allocation) and tracks a logical length `len ∈ 0..=N`. Its API
//! follows slices and `Vec` where that makes sense, and adds positional
//! insertion of runs and iterators, range erasure, and assignment that reuses
//! live elements.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment.
//! - You know capacities at compile time.
//! - You want predictable, allocation-free behavior and can work with a fixed
//!   maximum length, but your elements own resources (`String`, boxes, handles).
//!
//! It may not be the best fit if you need very large capacities or pass vectors
//! by value often: moving a `BoundedVec` moves the whole `N`-slot buffer.
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-maybe-uninit` feature flag:
//!
//! - **Default (tracked) backend**:
//!   - Storage is `[T; N]`; every slot always holds a valid `T`.
//!   - The crate is `#![forbid(unsafe_code)]`.
//!   - A removed element is dropped at once and `T::default()` takes its
//!     slot; [`BoundedVec::extra_initialized`] reports how many slots hold such
//!     a placeholder.
//!   - Creating a vector fills the buffer with `T::default()`, so `T: Default`
//!     is required wherever a fresh vector is built or an element is removed
//!     ([`Element`] names that requirement in shared code).
//!   - [`BoundedVec::from_array`] and [`BoundedVec::from_array_len`] are
//!     `const fn`, so vectors of `Copy` elements can be built in constants.
//!
//! - **`unsafe-maybe-uninit` backend**:
//!   - Storage is `[core::mem::MaybeUninit<T>; N]`.
//!   - Removed elements are dropped immediately (no work at all when `T` has
//!     no destructor); `extra_initialized()` is always `0`.
//!   - No operation requires `T: Default`, and `BoundedVec::new` is a `const fn`
//!     as well.
//!
//! In both backends the **public API is fully safe** and observable contents
//! are identical for every sequence of operations.
//!
//! ## Overflow policies
//!
//! Whenever an operation would exceed `N` (or pop from an empty vector), the
//! policy type `P` decides: [`Ignore`] (default, the operation does nothing),
//! [`Saturate`] (fill the spare slots, drop the excess), [`Panic`], or
//! [`Checked`] (return [`Error::Full`] / [`Error::Empty`]). All such
//! operations return `Result<_, Error>`; see [`policy`] for details.
//!
//! Index and range misuse is **not** governed by the policy: `v[i]`, `v[a..b]`,
//! invalid ranges for [`BoundedVec::erase_range`], and `pos > len` on
//! [`BoundedVec::erase`] or the insert family panic, exactly like slices and
//! `Vec`. `erase(len)` is a no-op, like erasing at the end position.
//! [`BoundedVec::at`] is the checked accessor.
//!
//! ## Features
//!
//! - `alloc` (default): [`Rope`] and [`ChunkedRope`].
//! - `serde`: `Serialize` / `Deserialize` for `BoundedVec`.
//! - `tracing`: `debug` events when a policy absorbs an overflow or empty pop,
//!   `trace` events when a rope allocates a chunk.
//! - `unsafe-maybe-uninit`: the raw storage backend described above.
//!
//! ## Example
//!
//! ```rust
//! use bounded_stack_vec::{BoundedVec, Checked};
//!
//! let mut v: BoundedVec<String, 4, Checked> = BoundedVec::default();
//! v.push_back("world".to_string()).unwrap();
//! v.insert(0, "hello".to_string()).unwrap();
//! v.append_from_slice(&["!".to_string()]).unwrap();
//! assert_eq!(v, ["hello", "world", "!"]);
//! assert!(v.append_n(2, &String::new()).is_err());
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

// Modules
mod error;
pub mod free;
mod index;
mod iter;
pub mod policy;
#[cfg(feature = "alloc")]
pub mod rope;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod test_util;
mod trace;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use free::{append, erase, erase_if, swap};
pub use iter::IntoIter;
pub use policy::{Checked, Ignore, Mode, Panic, Policy, Saturate};
#[cfg(feature = "alloc")]
pub use rope::{ChunkedRope, Rope};
pub use vec::{BoundedVec, Element};
