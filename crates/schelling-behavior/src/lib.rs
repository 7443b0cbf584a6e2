//! `schelling-behavior`: what agents want and where they go.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`happiness`]  | `HappinessEvaluator`, `NeighborTally`, `is_satisfied`        |
//! | [`relocation`] | `RelocationPolicy` trait, `RandomVacancy`, `relocate`        |
//! | [`moved`]      | `MovedSet`: source coordinates of relocation events          |
//! | [`metric`]     | `segregation_level`: happy / occupied ratio                  |
//!
//! # Design notes
//!
//! Everything here is a function of the grid passed in.  The evaluator holds
//! only its threshold; policies hold no state at all.  All randomness comes
//! from the caller's `SimRng`, so the simulation loop alone decides the order
//! in which draws happen.

pub mod happiness;
pub mod metric;
pub mod moved;
pub mod relocation;

#[cfg(test)]
mod tests;

pub use happiness::{HappinessEvaluator, NeighborTally, is_satisfied};
pub use metric::segregation_level;
pub use moved::MovedSet;
pub use relocation::{RandomVacancy, RelocationPolicy, relocate};
