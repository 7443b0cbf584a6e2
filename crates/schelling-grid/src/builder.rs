//! Shuffled initial layout.
//!
//! # Usage
//!
//! ```rust
//! use schelling_core::{CityConfig, SimRng};
//! use schelling_grid::GridBuilder;
//!
//! let config = CityConfig {
//!     width:            5,
//!     height:           5,
//!     occupation_rate:  0.8,
//!     category_a_split: 0.5,
//!     tolerance:        0.4,
//! };
//! let grid = GridBuilder::new(&config).build(&mut SimRng::new(42)).unwrap();
//!
//! let counts = grid.counts();
//! assert_eq!((counts.category_a, counts.category_b, counts.empty), (10, 10, 5));
//! ```

use schelling_core::{Agent, Category, CityConfig, Population, SimRng};

use crate::{Cell, Grid, GridResult};

/// Builds the initial [`Grid`] for a [`CityConfig`].
///
/// The grid is filled from a multiset of exactly `width × height` entries
/// (`count_a` category-A agents, `count_b` category-B agents, `vacant` empty
/// markers), shuffled uniformly, then laid out in row-major order.  Placement
/// is a bijection between the shuffled entries and cell positions, so no two
/// agents ever share a cell.
pub struct GridBuilder {
    config: CityConfig,
}

impl GridBuilder {
    pub fn new(config: &CityConfig) -> Self {
        Self { config: config.clone() }
    }

    /// The counts the built grid will have.
    pub fn population(&self) -> Population {
        self.config.population()
    }

    /// Validate the configuration and lay out a shuffled grid.
    ///
    /// Consumes exactly one shuffle's worth of draws from `rng`.
    pub fn build(self, rng: &mut SimRng) -> GridResult<Grid> {
        self.config.validate()?;
        let p = self.config.population();

        let mut cells: Vec<Cell> = Vec::with_capacity(p.total);
        cells.extend(std::iter::repeat_n(Cell::Occupied(Agent::new(Category::A)), p.count_a));
        cells.extend(std::iter::repeat_n(Cell::Occupied(Agent::new(Category::B)), p.count_b));
        cells.extend(std::iter::repeat_n(Cell::Empty, p.vacant));
        rng.shuffle(&mut cells);

        Ok(Grid::from_cells(self.config.width, self.config.height, cells))
    }
}
