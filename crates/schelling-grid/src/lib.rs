//! `schelling-grid`: the city grid.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`cell`]    | `Cell`: `Empty` or `Occupied(Agent)`                        |
//! | [`grid`]    | `Grid` storage, neighbor lookup, vacancy listing, moves     |
//! | [`builder`] | `GridBuilder`: shuffled initial layout from a `CityConfig`  |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Topology
//!
//! Moore neighborhood (8 surrounding cells) clipped at the borders: interior
//! cells have 8 neighbors, edge cells 5, corner cells 3.  There is no
//! wraparound.

pub mod builder;
pub mod cell;
pub mod error;
pub mod grid;

#[cfg(test)]
mod tests;

pub use builder::GridBuilder;
pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use grid::{Grid, GridCounts, NEIGHBOR_OFFSETS};
