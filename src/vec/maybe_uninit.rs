// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for the `unsafe-maybe-uninit` backend:
// - `0 <= len <= N` always holds.
// - Elements in `buf[..len]` are initialized `T` values owned by the vector.
// - Elements in `buf[len..N]` are logically uninitialized and must never be
//   read as `T` or dropped.
// - `len` is lowered before any element is dropped, so a panicking destructor
//   can never lead to a double drop.
// - All public methods maintain these invariants.

mod as_ptr;
mod drop;
mod from;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod slice;
mod split_off;
mod truncate;
