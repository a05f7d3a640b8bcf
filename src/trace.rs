// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Optional `tracing` instrumentation.
//!
//! `event!(level, "message", field, ...)` forwards to the matching `tracing`
//! macro when the `tracing` feature is enabled, recording each listed local as a
//! field of the same name. Without the feature it expands to nothing beyond
//! borrowing the fields.

macro_rules! event {
    ($level:ident, $msg:literal $(, $field:ident)* $(,)?) => {
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($field = $field,)* $msg);
        #[cfg(not(feature = "tracing"))]
        let _ = ($(&$field,)*);
    };
}

pub(crate) use event;
