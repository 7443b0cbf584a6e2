//! `schelling-sim`: sweep loop orchestrator for the rust_schelling model.
//!
//! # Two-phase sweep
//!
//! ```text
//! while status == Running:
//!   ⓪ Budget   : iteration == max_iterations → BudgetExhausted (stop)
//!   ① Classify : snapshot every dissatisfied agent from the current grid
//!                (empty snapshot → Converged, stop)
//!   ② Relocate : for each snapshot coordinate in scan order, move the agent
//!                to a vacancy picked by the RelocationPolicy
//!   ③ Report   : recompute the segregation level, hand an IterationReport
//!                and the grid to the observer, advance the counter
//! ```
//!
//! Classification never sees moves made later in the same sweep.  Within a
//! sweep, agents earlier in scan order win contested vacancies.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use schelling_core::{CityConfig, SimConfig};
//! use schelling_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(city, SimConfig { max_iterations: 100, seed: 42 })
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! println!("{} after {} sweeps", summary.status, summary.iterations);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod report;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use report::{IterationReport, SimStatus, SimSummary};
pub use sim::Sim;
