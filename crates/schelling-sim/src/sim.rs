//! The `Sim` struct and its sweep loop.

use schelling_behavior::{HappinessEvaluator, MovedSet, RelocationPolicy, relocate};
use schelling_core::{CityConfig, Coord, Iteration, SimConfig, SimRng};
use schelling_grid::Grid;

use crate::{IterationReport, SimObserver, SimResult, SimStatus, SimSummary};

/// The main simulation runner.
///
/// `Sim<P>` owns the grid, the moved set, and the RNG, and drives the
/// classify-then-relocate sweep until a terminal [`SimStatus`]:
///
/// 1. **Budget**: stop with `BudgetExhausted` once `max_iterations` sweeps
///    have run.
/// 2. **Classify**: snapshot all dissatisfied agents from the current grid;
///    stop with `Converged` if there are none.
/// 3. **Relocate** (sequential, scan order): move each snapshot agent to a
///    vacancy picked by the policy.
/// 4. **Report**: recompute the segregation level and notify the observer.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: RelocationPolicy> {
    /// The five model parameters this run was built from.
    pub city: CityConfig,

    /// Sweep budget and seed.
    pub config: SimConfig,

    /// The city.  Mutated in place by relocations only.
    pub grid: Grid,

    /// Happiness predicate at `city.tolerance`.
    pub evaluator: HappinessEvaluator,

    /// Destination choice for displaced agents.
    pub policy: P,

    /// Seeded RNG; the initial shuffle has already been drawn from it.
    pub rng: SimRng,

    /// Source coordinates of all relocations so far.
    pub moved: MovedSet,

    /// Completed sweeps.
    pub iteration: Iteration,

    /// Current loop state.
    pub status: SimStatus,

    /// Segregation level of the initial layout.
    pub initial_segregation: f64,
}

impl<P: RelocationPolicy> Sim<P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Sweep until converged or out of budget, then return the summary.
    ///
    /// Calls observer hooks at start, after every sweep, and at the end.
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    /// `on_sim_start` fires only while the grid is still the initial layout.
    /// Calling `run` again after a terminal state returns the same summary
    /// without touching the grid or calling any hook.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimSummary> {
        if self.status.is_terminal() {
            return Ok(self.summary());
        }
        if self.iteration == Iteration::ZERO {
            observer.on_sim_start(&self.grid, self.evaluator.segregation_level(&self.grid));
        }

        while !self.step(observer)?.is_terminal() {}

        let summary = self.summary();
        tracing::info!(
            status      = %summary.status,
            iterations  = summary.iterations,
            moved       = summary.moved_agents,
            initial     = summary.initial_segregation,
            final_level = summary.final_segregation,
            "simulation finished"
        );
        observer.on_sim_end(&summary, &self.grid);
        Ok(summary)
    }

    /// Run at most one sweep and return the resulting status.
    ///
    /// Returns `Running` after a completed sweep.  Once terminal, further
    /// calls return the same status and change nothing.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<SimStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        // ── Budget ────────────────────────────────────────────────────────
        if self.iteration.0 >= self.config.max_iterations {
            self.status = SimStatus::BudgetExhausted;
            return Ok(self.status);
        }

        // ── Classify (snapshot) ───────────────────────────────────────────
        //
        // Taken once from the pre-sweep grid.  Relocations below must not
        // change who counts as unhappy in this sweep.
        let unhappy: Vec<Coord> = self.evaluator.unhappy_agents(&self.grid);
        if unhappy.is_empty() {
            self.status = SimStatus::Converged;
            return Ok(self.status);
        }

        // ── Relocate (sequential, scan order) ─────────────────────────────
        let mut relocated = 0usize;
        for &from in &unhappy {
            let dest = relocate(&mut self.grid, from, &self.policy, &mut self.moved, &mut self.rng)?;
            if dest.is_some() {
                relocated += 1;
            }
        }

        // ── Report ────────────────────────────────────────────────────────
        self.iteration = self.iteration.next();
        let report = IterationReport {
            iteration:       self.iteration,
            width:           self.city.width,
            height:          self.city.height,
            occupation_rate: self.city.occupation_rate,
            tolerance:       self.city.tolerance,
            unhappy:         unhappy.len(),
            relocated,
            moved_agents:    self.moved.len(),
            segregation:     self.evaluator.segregation_level(&self.grid),
        };
        tracing::debug!(
            iteration   = report.iteration.0,
            unhappy     = report.unhappy,
            relocated   = report.relocated,
            segregation = report.segregation,
            "sweep complete"
        );
        observer.on_iteration_end(&report, &self.grid);

        Ok(SimStatus::Running)
    }

    /// Dissatisfied agents in the current grid, in scan order.
    ///
    /// Empty once the loop has converged.
    pub fn unhappy_agents(&self) -> Vec<Coord> {
        self.evaluator.unhappy_agents(&self.grid)
    }

    /// Segregation level of the current grid.
    pub fn segregation_level(&self) -> f64 {
        self.evaluator.segregation_level(&self.grid)
    }

    /// Snapshot of the run so far (final once the status is terminal).
    pub fn summary(&self) -> SimSummary {
        SimSummary {
            city:                self.city.clone(),
            seed:                self.config.seed,
            status:              self.status,
            iterations:          self.iteration.0,
            initial_segregation: self.initial_segregation,
            final_segregation:   self.segregation_level(),
            moved_agents:        self.moved.len(),
        }
    }
}
