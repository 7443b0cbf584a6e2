//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `iteration_summaries.csv`
//! - `grid_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CellRow, IterationRow, OutputResult};

pub const ITERATION_FILE: &str = "iteration_summaries.csv";
pub const SNAPSHOT_FILE:  &str = "grid_snapshots.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    iterations: Writer<File>,
    snapshots:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files, and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut iterations = Writer::from_path(dir.join(ITERATION_FILE))?;
        iterations.write_record(["iteration", "unhappy", "relocated", "moved_agents", "segregation"])?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(["iteration", "row", "col", "state"])?;

        Ok(Self {
            iterations,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_iteration(&mut self, row: &IterationRow) -> OutputResult<()> {
        self.iterations.write_record(&[
            row.iteration.to_string(),
            row.unhappy.to_string(),
            row.relocated.to_string(),
            row.moved_agents.to_string(),
            format!("{:.6}", row.segregation),
        ])?;
        Ok(())
    }

    fn write_cells(&mut self, rows: &[CellRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.iteration.to_string(),
                row.row.to_string(),
                row.col.to_string(),
                row.state.to_owned(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.iterations.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
