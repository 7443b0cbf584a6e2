//! The happiness predicate.
//!
//! An agent is satisfied when the share of like agents among its *occupied*
//! neighbors reaches the tolerance threshold:
//!
//! ```text
//! satisfied ⇔ occupied == 0  ∨  similar / occupied ≥ threshold
//! ```
//!
//! Vacant neighbors are ignored entirely, so an isolated agent is always
//! satisfied.  Vacant cells themselves are never unhappy.

use schelling_core::{Agent, Coord};
use schelling_grid::{Cell, Grid};

// ── NeighborTally ─────────────────────────────────────────────────────────────

/// Neighbor counts seen by one agent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborTally {
    /// Occupied neighbors sharing the agent's category.
    pub similar:  u32,
    /// Occupied neighbors of any category.
    pub occupied: u32,
}

impl NeighborTally {
    /// Count `agent`'s view of `neighbors`.
    pub fn count(agent: Agent, neighbors: impl IntoIterator<Item = Cell>) -> Self {
        let mut tally = NeighborTally::default();
        for other in neighbors.into_iter().filter_map(Cell::agent) {
            tally.occupied += 1;
            if other.is_similar(agent) {
                tally.similar += 1;
            }
        }
        tally
    }

    /// `similar / occupied`, or `None` when there are no occupied neighbors.
    #[inline]
    pub fn similarity(self) -> Option<f64> {
        (self.occupied > 0).then(|| self.similar as f64 / self.occupied as f64)
    }

    /// Inclusive threshold test.  No occupied neighbors always satisfies.
    #[inline]
    pub fn satisfies(self, threshold: f64) -> bool {
        self.similarity().is_none_or(|s| s >= threshold)
    }
}

// ── HappinessEvaluator ────────────────────────────────────────────────────────

/// The happiness predicate bound to one tolerance threshold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HappinessEvaluator {
    threshold: f64,
}

impl HappinessEvaluator {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Neighbor tally for the agent at `coord`; `None` for a vacant cell.
    ///
    /// # Panics
    /// Panics if `coord` is out of bounds.
    pub fn tally(&self, grid: &Grid, coord: Coord) -> Option<NeighborTally> {
        grid[coord]
            .agent()
            .map(|agent| NeighborTally::count(agent, grid.neighbors(coord)))
    }

    /// Whether the cell at `coord` is satisfied.  Vacant cells always are.
    ///
    /// # Panics
    /// Panics if `coord` is out of bounds.
    pub fn is_satisfied(&self, grid: &Grid, coord: Coord) -> bool {
        self.tally(grid, coord)
            .is_none_or(|t| t.satisfies(self.threshold))
    }

    /// Every dissatisfied agent, in row-major scan order.
    ///
    /// The list reflects `grid` as passed; the simulation loop takes it as
    /// the sweep's snapshot before relocating anyone.
    pub fn unhappy_agents(&self, grid: &Grid) -> Vec<Coord> {
        grid.occupied()
            .filter(|&(coord, agent)| {
                !NeighborTally::count(agent, grid.neighbors(coord)).satisfies(self.threshold)
            })
            .map(|(coord, _)| coord)
            .collect()
    }
}

/// Free-function form of [`HappinessEvaluator::is_satisfied`].
pub fn is_satisfied(grid: &Grid, coord: Coord, threshold: f64) -> bool {
    HappinessEvaluator::new(threshold).is_satisfied(grid, coord)
}
