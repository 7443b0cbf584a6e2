//! Bookkeeping of relocated agents.
//!
//! The set is keyed by the *source* coordinate of each relocation event, not
//! by agent identity.  Consequences worth knowing when reading the count:
//!
//! - an agent relocated twice contributes two entries (one per source);
//! - two agents that each leave the same coordinate at different times
//!   collapse into one entry.
//!
//! `len()` is therefore "distinct coordinates that have been vacated by a
//! move", which is the figure the final report prints as agents moved.

#[cfg(not(feature = "fx-hash"))]
type CoordSet = std::collections::HashSet<schelling_core::Coord>;

#[cfg(feature = "fx-hash")]
type CoordSet = rustc_hash::FxHashSet<schelling_core::Coord>;

use schelling_core::Coord;

/// Source coordinates of every relocation so far.
#[derive(Clone, Debug, Default)]
pub struct MovedSet {
    sources: CoordSet,
}

impl MovedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a relocation out of `source`.  Returns `true` if the coordinate
    /// was not already present.
    #[inline]
    pub fn record(&mut self, source: Coord) -> bool {
        self.sources.insert(source)
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.sources.contains(&coord)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Recorded coordinates in row-major order.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.sources.iter().copied().collect();
        v.sort_unstable();
        v
    }
}
