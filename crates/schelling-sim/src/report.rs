//! Loop status and the data handed to presentation layers.

use std::fmt;

use schelling_core::{CityConfig, Iteration};

// ── SimStatus ─────────────────────────────────────────────────────────────────

/// Loop state.  `Converged` and `BudgetExhausted` are terminal and sticky;
/// both are normal outcomes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SimStatus {
    #[default]
    Running,
    /// A sweep found no dissatisfied agent.
    Converged,
    /// `max_iterations` sweeps ran without converging.
    BudgetExhausted,
}

impl SimStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SimStatus::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SimStatus::Running         => "running",
            SimStatus::Converged       => "converged",
            SimStatus::BudgetExhausted => "budget exhausted",
        }
    }
}

impl fmt::Display for SimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── IterationReport ───────────────────────────────────────────────────────────

/// Progress after one completed sweep.
///
/// `Display` renders the one-line status shown under each frame:
///
/// ```text
/// Grid Size: 20x20 | Occupation: 0.80 | Discrimination Rate: 0.40 | Iteration: 3 | Agents Moved: 57
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IterationReport {
    /// The sweep just completed (first sweep is 1).
    pub iteration:       Iteration,
    pub width:           u32,
    pub height:          u32,
    pub occupation_rate: f64,
    pub tolerance:       f64,
    /// Size of this sweep's unhappy snapshot.
    pub unhappy:         usize,
    /// How many of those actually moved (the rest found no vacancy).
    pub relocated:       usize,
    /// Running size of the moved set.
    pub moved_agents:    usize,
    /// Segregation level after this sweep's relocations.
    pub segregation:     f64,
}

impl fmt::Display for IterationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid Size: {}x{} | Occupation: {:.2} | Discrimination Rate: {:.2} | Iteration: {} | Agents Moved: {}",
            self.width,
            self.height,
            self.occupation_rate,
            self.tolerance,
            self.iteration.0,
            self.moved_agents,
        )
    }
}

// ── SimSummary ────────────────────────────────────────────────────────────────

/// Everything the final report needs once the loop has stopped.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimSummary {
    pub city:                CityConfig,
    pub seed:                u64,
    pub status:              SimStatus,
    /// Sweeps completed.
    pub iterations:          u64,
    pub initial_segregation: f64,
    pub final_segregation:   f64,
    /// Size of the moved set (distinct vacated source coordinates).
    pub moved_agents:        usize,
}
