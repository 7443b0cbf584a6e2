//! Model and run configuration.
//!
//! # Design
//!
//! `CityConfig` holds the five values that define a city: its dimensions, how
//! full it is, how the population splits between the two categories, and how
//! tolerant agents are.  All agent and vacancy counts derive from it by
//! truncation, never rounding:
//!
//!   total    = width × height
//!   occupied = ⌊total × occupation_rate⌋
//!   count_a  = ⌊occupied × category_a_split⌋
//!   count_b  = occupied − count_a
//!   vacant   = total − occupied
//!
//! `SimConfig` holds the per-run knobs that are not part of the model itself.

use crate::{ConfigError, ConfigResult};

// ── CityConfig ────────────────────────────────────────────────────────────────

/// The five model parameters, fixed at construction.
///
/// Typically produced by the `schelling-params` loader or generator and
/// passed to the grid builder.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityConfig {
    /// Number of columns.
    pub width: u32,

    /// Number of rows.
    pub height: u32,

    /// Fraction of cells occupied at start, in `[0, 1]`.
    pub occupation_rate: f64,

    /// Fraction of occupied cells assigned category A, in `[0, 1]`.
    pub category_a_split: f64,

    /// Minimum fraction of like neighbors (among occupied neighbors) an agent
    /// needs to be satisfied, in `[0, 1]`.  Compared inclusively.
    pub tolerance: f64,
}

impl CityConfig {
    /// Reject zero dimensions, oversized grids, and rates outside `[0, 1]`
    /// (including NaN).
    pub fn validate(&self) -> ConfigResult<()> {
        if self.width == 0 {
            return Err(ConfigError::InvalidDimension { what: "width", value: 0 });
        }
        if self.height == 0 {
            return Err(ConfigError::InvalidDimension { what: "height", value: 0 });
        }
        if self.width as u64 * self.height as u64 > u32::MAX as u64 {
            return Err(ConfigError::GridTooLarge {
                width:  self.width.into(),
                height: self.height.into(),
            });
        }
        check_rate("occupation_rate", self.occupation_rate)?;
        check_rate("category_a_split", self.category_a_split)?;
        check_rate("tolerance", self.tolerance)?;
        Ok(())
    }

    /// Total number of cells.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Derived agent and vacancy counts.
    pub fn population(&self) -> Population {
        let total = self.total_cells();
        let occupied = ((total as f64 * self.occupation_rate).floor() as usize).min(total);
        let count_a = ((occupied as f64 * self.category_a_split).floor() as usize).min(occupied);
        Population {
            total,
            occupied,
            count_a,
            count_b: occupied - count_a,
            vacant:  total - occupied,
        }
    }
}

fn check_rate(what: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { what, value })
    }
}

// ── Population ────────────────────────────────────────────────────────────────

/// Cell counts derived from a [`CityConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    pub total:    usize,
    pub occupied: usize,
    pub count_a:  usize,
    pub count_b:  usize,
    pub vacant:   usize,
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Per-run settings.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Sweep budget.  The loop stops with `BudgetExhausted` once this many
    /// sweeps have run without converging.
    pub max_iterations: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}
