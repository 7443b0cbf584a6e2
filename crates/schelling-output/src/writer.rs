//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CellRow, IterationRow, OutputResult};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are returned to the caller; [`SimOutputObserver`][crate::SimOutputObserver]
/// stores them for [`take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one sweep's counters.
    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()>;

    /// Write a batch of cell states (usually one whole grid).
    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()> {
        (**self).write_iteration(row)
    }

    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        (**self).write_cells(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}
