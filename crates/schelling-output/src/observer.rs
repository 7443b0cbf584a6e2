//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use schelling_core::Iteration;
use schelling_grid::Grid;
use schelling_sim::{IterationReport, SimObserver, SimSummary};

use crate::row::{CellRow, IterationRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one row per sweep and periodic grid
/// snapshots to any [`OutputWriter`] backend.
///
/// With a non-zero `snapshot_interval` the grid is written before the first
/// sweep (iteration 0), after every sweep whose number is a multiple of the
/// interval, and once more at the end if the last sweep was not already
/// written.  An interval of 0 disables snapshots entirely.
///
/// Errors from the writer are stored because `SimObserver` methods have no
/// return value.  After `sim.run()` returns, check with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_snapshot:     Option<Iteration>,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W, snapshot_interval: u64) -> Self {
        Self {
            writer,
            snapshot_interval,
            last_snapshot: None,
            last_error:    None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn snapshot(&mut self, iteration: Iteration, grid: &Grid) {
        if self.snapshot_interval == 0 || self.last_snapshot == Some(iteration) {
            return;
        }
        self.last_snapshot = Some(iteration);
        let rows = CellRow::snapshot(iteration, grid);
        let result = self.writer.write_cells(&rows);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "output write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_start(&mut self, grid: &Grid, _segregation: f64) {
        self.snapshot(Iteration::ZERO, grid);
    }

    fn on_iteration_end(&mut self, report: &IterationReport, grid: &Grid) {
        let result = self.writer.write_iteration(&IterationRow::from(report));
        self.store_err(result);

        if report.iteration.is_multiple_of(self.snapshot_interval) {
            self.snapshot(report.iteration, grid);
        }
    }

    fn on_sim_end(&mut self, summary: &SimSummary, grid: &Grid) {
        self.snapshot(Iteration(summary.iterations), grid);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
