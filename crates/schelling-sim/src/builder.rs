//! Fluent builder for constructing a [`Sim`].

use schelling_behavior::{HappinessEvaluator, MovedSet, RandomVacancy, RelocationPolicy};
use schelling_core::{CityConfig, Iteration, SimConfig, SimRng};
use schelling_grid::{Grid, GridBuilder};

use crate::{Sim, SimError, SimResult, SimStatus};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`CityConfig`]: dimensions, occupation, category split, tolerance
/// - [`SimConfig`]: sweep budget and seed
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                                          |
/// |------------------|--------------------------------------------------|
/// | `.policy(p)`     | [`RandomVacancy`]                                |
/// | `.grid(g)`       | Shuffled layout from [`GridBuilder`]             |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(city, SimConfig { max_iterations: 50, seed: 7 })
///     .build()?;
/// let summary = sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: RelocationPolicy = RandomVacancy> {
    city:   CityConfig,
    config: SimConfig,
    grid:   Option<Grid>,
    policy: P,
}

impl SimBuilder<RandomVacancy> {
    /// Create a builder with all required inputs.
    pub fn new(city: CityConfig, config: SimConfig) -> Self {
        Self {
            city,
            config,
            grid:   None,
            policy: RandomVacancy,
        }
    }
}

impl<P: RelocationPolicy> SimBuilder<P> {
    /// Swap the relocation policy.
    pub fn policy<Q: RelocationPolicy>(self, policy: Q) -> SimBuilder<Q> {
        SimBuilder {
            city:   self.city,
            config: self.config,
            grid:   self.grid,
            policy,
        }
    }

    /// Start from an explicit layout instead of a shuffled one.
    ///
    /// Its dimensions must match the city's.  The occupation and split rates
    /// are then descriptive only; counts come from the grid as given.
    pub fn grid(mut self, grid: Grid) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Validate inputs, lay out the grid, and return a ready-to-run [`Sim`].
    ///
    /// The shuffled layout is the first thing drawn from the seeded RNG, so
    /// the same seed reproduces the same initial grid.
    pub fn build(self) -> SimResult<Sim<P>> {
        self.city.validate()?;
        let mut rng = SimRng::new(self.config.seed);

        let grid = match self.grid {
            Some(g) => {
                if g.width() != self.city.width || g.height() != self.city.height {
                    return Err(SimError::GridShapeMismatch {
                        width:      self.city.width,
                        height:     self.city.height,
                        got_width:  g.width(),
                        got_height: g.height(),
                    });
                }
                g
            }
            None => GridBuilder::new(&self.city).build(&mut rng)?,
        };

        let evaluator = HappinessEvaluator::new(self.city.tolerance);
        let initial_segregation = evaluator.segregation_level(&grid);

        Ok(Sim {
            city:      self.city,
            config:    self.config,
            grid,
            evaluator,
            policy:    self.policy,
            rng,
            moved:     MovedSet::new(),
            iteration: Iteration::ZERO,
            status:    SimStatus::Running,
            initial_segregation,
        })
    }
}
