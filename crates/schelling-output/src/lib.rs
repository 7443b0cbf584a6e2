//! `schelling-output`: what leaves the simulation: data files, frames, and
//! the final report.
//!
//! | Feature   | Backend | Files created                                        |
//! |-----------|---------|------------------------------------------------------|
//! | *(none)*  | CSV     | `iteration_summaries.csv`, `grid_snapshots.csv`      |
//! | `sqlite`  | SQLite  | `output.db`                                          |
//!
//! Both backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `schelling_sim::SimObserver`.
//! [`AsciiRenderer`] is a second observer that draws each sweep as text, and
//! [`write_report`] formats the [`SimSummary`][schelling_sim::SimSummary]
//! once the run is over.
//!
//! # Usage
//!
//! ```rust,ignore
//! use schelling_output::{CsvWriter, SimOutputObserver, write_report};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, 10);
//! let summary = sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! write_report(&summary, std::io::stdout().lock())?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod render;
pub mod report;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use render::AsciiRenderer;
pub use report::write_report;
pub use row::{CellRow, IterationRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
