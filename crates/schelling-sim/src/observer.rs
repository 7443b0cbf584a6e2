//! Simulation observer trait for rendering, reporting, and data collection.

use schelling_grid::Grid;

use crate::{IterationReport, SimSummary};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// sweep loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  The grid is always passed read-only.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_iteration_end(&mut self, report: &IterationReport, _grid: &Grid) {
///         println!("{report}");
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once when `run` starts, with the initial layout and its
    /// segregation level.
    fn on_sim_start(&mut self, _grid: &Grid, _segregation: f64) {}

    /// Called after every completed sweep (classification and relocation).
    fn on_iteration_end(&mut self, _report: &IterationReport, _grid: &Grid) {}

    /// Called once after the loop reaches a terminal state.
    fn on_sim_end(&mut self, _summary: &SimSummary, _grid: &Grid) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_sim_start(&mut self, grid: &Grid, segregation: f64) {
        (**self).on_sim_start(grid, segregation);
    }

    fn on_iteration_end(&mut self, report: &IterationReport, grid: &Grid) {
        (**self).on_iteration_end(report, grid);
    }

    fn on_sim_end(&mut self, summary: &SimSummary, grid: &Grid) {
        (**self).on_sim_end(summary, grid);
    }
}

/// Fan out to two observers, first `.0` then `.1`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_sim_start(&mut self, grid: &Grid, segregation: f64) {
        self.0.on_sim_start(grid, segregation);
        self.1.on_sim_start(grid, segregation);
    }

    fn on_iteration_end(&mut self, report: &IterationReport, grid: &Grid) {
        self.0.on_iteration_end(report, grid);
        self.1.on_iteration_end(report, grid);
    }

    fn on_sim_end(&mut self, summary: &SimSummary, grid: &Grid) {
        self.0.on_sim_end(summary, grid);
        self.1.on_sim_end(summary, grid);
    }
}

/// An optional observer; `None` does nothing.
impl<O: SimObserver> SimObserver for Option<O> {
    fn on_sim_start(&mut self, grid: &Grid, segregation: f64) {
        if let Some(o) = self {
            o.on_sim_start(grid, segregation);
        }
    }

    fn on_iteration_end(&mut self, report: &IterationReport, grid: &Grid) {
        if let Some(o) = self {
            o.on_iteration_end(report, grid);
        }
    }

    fn on_sim_end(&mut self, summary: &SimSummary, grid: &Grid) {
        if let Some(o) = self {
            o.on_sim_end(summary, grid);
        }
    }
}
