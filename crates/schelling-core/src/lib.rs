//! `schelling-core`: foundational types for the `rust_schelling` workspace.
//!
//! This crate is a dependency of every other `schelling-*` crate.  It has no
//! `schelling-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`agent`]       | `Category`, `Agent`                                   |
//! | [`coord`]       | `Coord`: (row, col) cell address                      |
//! | [`iteration`]   | `Iteration` sweep counter                             |
//! | [`config`]      | `CityConfig`, `SimConfig`, `Population`               |
//! | [`rng`]         | `SimRng` (seedable, explicitly passed)                |
//! | [`error`]       | `ConfigError`, `ConfigResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod agent;
pub mod config;
pub mod coord;
pub mod error;
pub mod iteration;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{Agent, Category};
pub use config::{CityConfig, Population, SimConfig};
pub use coord::Coord;
pub use error::{ConfigError, ConfigResult};
pub use iteration::Iteration;
pub use rng::SimRng;
