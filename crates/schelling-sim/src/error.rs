use schelling_core::ConfigError;
use schelling_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("initial grid is {got_width} x {got_height}, configuration expects {width} x {height}")]
    GridShapeMismatch {
        width:      u32,
        height:     u32,
        got_width:  u32,
        got_height: u32,
    },

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
