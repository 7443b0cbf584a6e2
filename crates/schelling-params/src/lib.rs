//! `schelling-params`: where a run's `CityConfig` comes from.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`loader`] | `key: value` parameter files → `ParamSet` → `CityConfig`      |
//! | [`random`] | `random_params`: draw a configuration within fixed ranges     |
//! | [`error`]  | `ParamError`, `ParamResult<T>`                                |
//!
//! Every path ends in [`CityConfig::validate`][schelling_core::CityConfig::validate],
//! so a configuration that leaves this crate is always in range.

pub mod error;
pub mod loader;
pub mod random;


pub use error::{ParamError, ParamResult};
pub use loader::{ParamSet, ParamValue, keys, load_params_file, load_params_reader, write_params};
pub use random::random_params;
