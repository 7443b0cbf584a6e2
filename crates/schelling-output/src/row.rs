//! Plain data rows written by output backends.

use schelling_core::{Coord, Iteration};
use schelling_grid::{Cell, Grid};
use schelling_sim::IterationReport;

/// Counters for one completed sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationRow {
    pub iteration:    u64,
    pub unhappy:      u64,
    pub relocated:    u64,
    pub moved_agents: u64,
    pub segregation:  f64,
}

impl From<&IterationReport> for IterationRow {
    fn from(report: &IterationReport) -> Self {
        Self {
            iteration:    report.iteration.0,
            unhappy:      report.unhappy as u64,
            relocated:    report.relocated as u64,
            moved_agents: report.moved_agents as u64,
            segregation:  report.segregation,
        }
    }
}

/// The state of one cell at a given iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRow {
    pub iteration: u64,
    pub row:       u32,
    pub col:       u32,
    /// `"empty"`, `"a"`, or `"b"`.
    pub state:     &'static str,
}

impl CellRow {
    pub fn new(iteration: Iteration, coord: Coord, cell: Cell) -> Self {
        Self {
            iteration: iteration.0,
            row:       coord.row,
            col:       coord.col,
            state:     cell.as_str(),
        }
    }

    /// One row per cell of `grid`, row-major.
    pub fn snapshot(iteration: Iteration, grid: &Grid) -> Vec<CellRow> {
        grid.iter()
            .map(|(coord, cell)| CellRow::new(iteration, coord, cell))
            .collect()
    }
}
