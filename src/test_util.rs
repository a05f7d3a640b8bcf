// This file is part of bounded-stack-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Drop-counting element type shared by the unit tests.

// Std imports
use std::{cell::Cell, rc::Rc};

/// Counts how many [`Probe`]s created from it have been dropped.
#[derive(Default, Clone)]
pub(crate) struct Tally(Rc<Cell<usize>>);

impl Tally {
    pub(crate) fn probe(&self, id: usize) -> Probe {
        Probe {
            id,
            tally: Some(self.0.clone()),
        }
    }

    pub(crate) fn dropped(&self) -> usize {
        self.0.get()
    }
}

/// Element that reports its drop to a [`Tally`]. `Probe::default()` is an
/// untracked placeholder.
#[derive(Debug, Default, Clone)]
pub(crate) struct Probe {
    pub(crate) id: usize,
    tally: Option<Rc<Cell<usize>>>,
}

impl Drop for Probe {
    fn drop(&mut self) {
        if let Some(t) = &self.tally {
            t.set(t.get() + 1);
        }
    }
}
