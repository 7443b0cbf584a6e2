//! Cell addresses.
//!
//! `Coord` is `Copy + Ord + Hash` so it can key the moved set and be sorted
//! without ceremony.  Ordering is row-major (row first, then column), which is
//! the scan order used everywhere in the workspace.

use std::fmt;

/// A `(row, col)` position in the grid.  Row 0 is the top row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    #[inline(always)]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Row-major index into a grid that is `width` columns wide.
    #[inline(always)]
    pub fn index(self, width: u32) -> usize {
        self.row as usize * width as usize + self.col as usize
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn from_index(index: usize, width: u32) -> Self {
        let w = width as usize;
        Self {
            row: (index / w) as u32,
            col: (index % w) as u32,
        }
    }

    /// Apply a signed offset, returning `None` if the result falls outside a
    /// `height × width` grid.  No wraparound.
    #[inline]
    pub fn offset(self, d_row: i32, d_col: i32, height: u32, width: u32) -> Option<Coord> {
        let row = self.row as i64 + d_row as i64;
        let col = self.col as i64 + d_col as i64;
        if row < 0 || col < 0 || row >= height as i64 || col >= width as i64 {
            return None;
        }
        Some(Coord::new(row as u32, col as u32))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
