//! Sweep counter.
//!
//! One iteration is a full classify-then-relocate sweep over the grid.
//! Iteration 0 is the initial layout, before any sweep has run; the first
//! completed sweep is iteration 1.

use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iteration(pub u64);

impl Iteration {
    pub const ZERO: Iteration = Iteration(0);

    /// The iteration after `self`.
    #[inline]
    pub fn next(self) -> Iteration {
        Iteration(self.0 + 1)
    }

    /// `true` every `interval` iterations.  `interval == 0` never matches.
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iteration {}", self.0)
    }
}
