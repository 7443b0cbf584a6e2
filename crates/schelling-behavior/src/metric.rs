//! The segregation level.
//!
//! In this model "segregation level" is the share of agents that are
//! satisfied, not a spatial clustering index:
//!
//! ```text
//! level = happy_agents / occupied_cells      (1.0 when nobody lives here)
//! ```
//!
//! The empty-city value of 1.0 is a fixed convention, not a limit.

use schelling_grid::Grid;

use crate::{HappinessEvaluator, NeighborTally};

/// Fraction of occupied cells whose agent is satisfied at `threshold`.
/// Always within `[0, 1]`.
pub fn segregation_level(grid: &Grid, threshold: f64) -> f64 {
    let mut occupied = 0usize;
    let mut happy = 0usize;
    for (coord, agent) in grid.occupied() {
        occupied += 1;
        if NeighborTally::count(agent, grid.neighbors(coord)).satisfies(threshold) {
            happy += 1;
        }
    }
    if occupied == 0 {
        return 1.0;
    }
    happy as f64 / occupied as f64
}

impl HappinessEvaluator {
    /// [`segregation_level`] at this evaluator's threshold.
    pub fn segregation_level(&self, grid: &Grid) -> f64 {
        segregation_level(grid, self.threshold())
    }
}
