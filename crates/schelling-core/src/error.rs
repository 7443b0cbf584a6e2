//! Configuration error type.
//!
//! Every out-of-range model parameter is rejected here, before a grid is
//! built.  A simulation never starts from a partially valid configuration.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{what} must be a positive integer, got {value}")]
    InvalidDimension { what: &'static str, value: i64 },

    #[error("{what} must be within [0, 1], got {value}")]
    RateOutOfRange { what: &'static str, value: f64 },

    #[error("grid of {width} x {height} cells is too large")]
    GridTooLarge { width: u64, height: u64 },
}

/// Shorthand result type for configuration checks.
pub type ConfigResult<T> = Result<T, ConfigError>;
