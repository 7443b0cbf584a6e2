//! Random parameter generation.
//!
//! | Parameter           | Range (inclusive) | Precision   |
//! |---------------------|-------------------|-------------|
//! | `width`, `height`   | 10 – 50           | integer     |
//! | `occupation_rate`   | 0.5 – 1.0         | 2 decimals  |
//! | `category_a_split`  | 0.3 – 0.7         | 2 decimals  |
//! | `tolerance`         | 0.2 – 0.8         | 2 decimals  |

use std::ops::RangeInclusive;

use schelling_core::{CityConfig, SimRng};

pub const DIMENSION_RANGE:  RangeInclusive<u32> = 10..=50;
pub const OCCUPATION_RANGE: RangeInclusive<f64> = 0.5..=1.0;
pub const SPLIT_RANGE:      RangeInclusive<f64> = 0.3..=0.7;
pub const TOLERANCE_RANGE:  RangeInclusive<f64> = 0.2..=0.8;

/// Draw a configuration from the ranges above.  Always valid.
pub fn random_params(rng: &mut SimRng) -> CityConfig {
    CityConfig {
        width:            rng.gen_range(DIMENSION_RANGE),
        height:           rng.gen_range(DIMENSION_RANGE),
        occupation_rate:  round2(rng.gen_range(OCCUPATION_RANGE)),
        category_a_split: round2(rng.gen_range(SPLIT_RANGE)),
        tolerance:        round2(rng.gen_range(TOLERANCE_RANGE)),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
