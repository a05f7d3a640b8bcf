// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Invariants for the default (tracked) backend:
// - `0 <= len <= N` and `len + extra <= N` always hold.
// - Every slot of `buf` holds a valid `T` at all times.
// - `buf[..len]` are the live elements.
// - `buf[len..len + extra]` were live once and now hold a `T::default()`
//   placeholder; the removed value was dropped when the slot was vacated.
// - `buf[len + extra..]` hold the values written at construction: default
//   placeholders, or the unused tail handed to `from_array_len`.

mod from;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod slice;
mod split_off;
mod truncate;
