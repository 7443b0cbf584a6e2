//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! Every random decision in a run (the initial shuffle, each relocation's
//! destination, random parameter generation) draws from one `SimRng` that is
//! passed explicitly by `&mut`.  There is no process-global random state, so
//! a run is fully reproduced by its seed:
//!
//!   same seed + same `CityConfig` → same initial grid → same final grid
//!
//! Independent streams (e.g. parameter generation vs. the simulation itself)
//! are derived with [`SimRng::child`] so that consuming more draws in one
//! stream never shifts the other.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable RNG for all simulation-level randomness.
///
/// Used only in single-threaded contexts; the simulation loop is sequential.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh seed from OS entropy.  Log it so the run can be replayed
    /// with [`SimRng::new`].
    pub fn entropy_seed() -> u64 {
        rand::random()
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates, uniform).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a uniformly random element.  Returns `None` if the slice is
    /// empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
