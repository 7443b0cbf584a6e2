//! The end-of-run report.

use std::io::{self, Write};

use schelling_sim::SimSummary;

/// Write the plain-text report for a finished run.
///
/// ```text
/// Simulation Report:
/// Grid size: 20 x 20
/// Occupation percentage: 0.8
/// Discriminating attribute percentage: 0.5
/// Discrimination rate: 0.4
/// Initial segregation level: 0.61
/// Final segregation level: 1.00
/// Number of agents who moved: 182
/// Termination: converged after 14 iteration(s)
/// ```
pub fn write_report<W: Write>(summary: &SimSummary, mut out: W) -> io::Result<()> {
    let city = &summary.city;
    writeln!(out, "Simulation Report:")?;
    writeln!(out, "Grid size: {} x {}", city.width, city.height)?;
    writeln!(out, "Occupation percentage: {}", city.occupation_rate)?;
    writeln!(out, "Discriminating attribute percentage: {}", city.category_a_split)?;
    writeln!(out, "Discrimination rate: {}", city.tolerance)?;
    writeln!(out, "Initial segregation level: {:.2}", summary.initial_segregation)?;
    writeln!(out, "Final segregation level: {:.2}", summary.final_segregation)?;
    writeln!(out, "Number of agents who moved: {}", summary.moved_agents)?;
    writeln!(out, "Termination: {} after {} iteration(s)", summary.status, summary.iterations)?;
    out.flush()
}
