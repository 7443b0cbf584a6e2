//! Grid error type.

use thiserror::Error;

use schelling_core::{ConfigError, Coord};

/// Errors produced by `schelling-grid`.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("cell {coord} is outside a {height} x {width} grid")]
    OutOfBounds { coord: Coord, height: u32, width: u32 },

    #[error("no agent to move at {0}")]
    EmptySource(Coord),

    #[error("destination {0} is already occupied")]
    OccupiedTarget(Coord),

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows { row: usize, got: usize, expected: usize },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type GridResult<T> = Result<T, GridError>;
