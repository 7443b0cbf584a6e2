//! Text rendering of the grid, one frame per sweep.
//!
//! ```text
//! Iteration 3
//! RR.B
//! R.BB
//! Grid Size: 4x2 | Occupation: 0.80 | Discrimination Rate: 0.40 | Iteration: 3 | Agents Moved: 2
//! ```

use std::io::{self, Write};
use std::time::Duration;

use schelling_core::Iteration;
use schelling_grid::Grid;
use schelling_sim::{IterationReport, SimObserver, SimSummary};

/// A [`SimObserver`] that draws the grid as text after every sweep.
///
/// `.` is a vacancy, `R` category A, `B` category B.  The initial layout is
/// drawn as `Iteration 0` without a status line.  An optional `pace` sleeps
/// after each frame so the run can be watched.
pub struct AsciiRenderer<W: Write> {
    out:        W,
    pace:       Option<Duration>,
    last_error: Option<io::Error>,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, pace: None, last_error: None }
    }

    /// Sleep for `pace` after every frame.
    pub fn with_pace(mut self, pace: Duration) -> Self {
        self.pace = Some(pace).filter(|d| !d.is_zero());
        self
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write one frame: title, grid rows, and the status line if given.
    pub fn draw(&mut self, iteration: Iteration, grid: &Grid, status: Option<&IterationReport>) -> io::Result<()> {
        writeln!(self.out, "{iteration}")?;
        let mut line = String::with_capacity(grid.width() as usize);
        for row in grid.rows() {
            line.clear();
            line.extend(row.iter().map(|cell| cell.symbol()));
            writeln!(self.out, "{line}")?;
        }
        if let Some(report) = status {
            writeln!(self.out, "{report}")?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    fn frame(&mut self, iteration: Iteration, grid: &Grid, status: Option<&IterationReport>) {
        if let Err(e) = self.draw(iteration, grid, status) {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
            return;
        }
        if let Some(pace) = self.pace {
            std::thread::sleep(pace);
        }
    }
}

impl<W: Write> SimObserver for AsciiRenderer<W> {
    fn on_sim_start(&mut self, grid: &Grid, _segregation: f64) {
        self.frame(Iteration::ZERO, grid, None);
    }

    fn on_iteration_end(&mut self, report: &IterationReport, grid: &Grid) {
        self.frame(report.iteration, grid, Some(report));
    }

    fn on_sim_end(&mut self, _summary: &SimSummary, _grid: &Grid) {
        if let Err(e) = self.out.flush() {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
