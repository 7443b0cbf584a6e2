//! Grid storage and neighborhood queries.
//!
//! # Data layout
//!
//! Cells live in one row-major `Vec<Cell>`; the cell at `(row, col)` is at
//! index `row * width + col`.  Row iteration is a contiguous slice scan, which
//! is what renderers and output writers want.
//!
//! All scans (`empty_cells`, `occupied`, `iter`) run in row-major order, so
//! every derived list is deterministic for a given grid.

use std::ops::Index;

use schelling_core::{Agent, Category, ConfigError, Coord};

use crate::{Cell, GridError, GridResult};

/// Moore-neighborhood offsets as `(d_row, d_col)`: cardinal directions first
/// (N, S, W, E), then diagonals (NW, NE, SW, SE).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];

// ── GridCounts ────────────────────────────────────────────────────────────────

/// Tally of cell contents.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GridCounts {
    pub category_a: usize,
    pub category_b: usize,
    pub empty:      usize,
}

impl GridCounts {
    #[inline]
    pub fn occupied(&self) -> usize {
        self.category_a + self.category_b
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// A `height × width` city of cells.
///
/// Build a shuffled initial layout with [`GridBuilder`][crate::GridBuilder];
/// use [`Grid::from_rows`] for hand-written layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  u32,
    height: u32,
    cells:  Vec<Cell>,
}

impl Grid {
    /// An all-vacant grid.
    pub fn empty(width: u32, height: u32) -> GridResult<Grid> {
        check_dimensions(width, height)?;
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        })
    }

    /// Build from row-major cells.  `cells.len()` must equal `width * height`.
    pub(crate) fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Grid {
        debug_assert_eq!(cells.len(), width as usize * height as usize);
        Grid { width, height, cells }
    }

    /// Build from explicit rows.  All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> GridResult<Grid> {
        let expected = rows.first().map_or(0, Vec::len);
        let (width, height) = shape_from_lens(expected, rows.len())?;

        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != expected {
                return Err(GridError::RaggedRows { row, got: r.len(), expected });
            }
            cells.extend(r);
        }
        Ok(Grid { width, height, cells })
    }

    // ── Shape ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    // ── Cell access ───────────────────────────────────────────────────────

    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            Some(self.cells[coord.index(self.width)])
        } else {
            None
        }
    }

    /// Overwrite a cell, returning its previous contents.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> GridResult<Cell> {
        let i = self.checked_index(coord)?;
        Ok(std::mem::replace(&mut self.cells[i], cell))
    }

    /// Row-major slice of all cells.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Rows from top to bottom.  Read-only view for renderers.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Every cell with its coordinate, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (Coord::from_index(i, width), cell))
    }

    // ── Neighborhood ──────────────────────────────────────────────────────

    /// In-bounds Moore neighbors of `coord`, in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbor_coords(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let (height, width) = (self.height, self.width);
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| coord.offset(dr, dc, height, width))
    }

    /// Contents of the in-bounds Moore neighbors of `coord`.
    ///
    /// Yields 8 cells for interior positions, 5 on an edge, 3 in a corner.
    /// Vacant neighbors are included as `Cell::Empty`.
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = Cell> + '_ {
        self.neighbor_coords(coord)
            .map(move |c| self.cells[c.index(self.width)])
    }

    // ── Scans ─────────────────────────────────────────────────────────────

    /// All vacant coordinates in row-major order.  O(width × height).
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.iter()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// All occupied coordinates with their agents, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, Agent)> + '_ {
        self.iter().filter_map(|(coord, cell)| cell.agent().map(|a| (coord, a)))
    }

    pub fn counts(&self) -> GridCounts {
        let mut counts = GridCounts::default();
        for cell in &self.cells {
            match cell.category() {
                None              => counts.empty += 1,
                Some(Category::A) => counts.category_a += 1,
                Some(Category::B) => counts.category_b += 1,
            }
        }
        counts
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Move the agent at `from` into the vacant cell `to`, leaving `from`
    /// vacant.  This is the only way agents change position during a run;
    /// it never changes the agent count or the category distribution.
    pub fn move_agent(&mut self, from: Coord, to: Coord) -> GridResult<Agent> {
        let src = self.checked_index(from)?;
        let dst = self.checked_index(to)?;
        let agent = self.cells[src].agent().ok_or(GridError::EmptySource(from))?;
        if !self.cells[dst].is_empty() {
            return Err(GridError::OccupiedTarget(to));
        }
        self.cells[dst] = Cell::Occupied(agent);
        self.cells[src] = Cell::Empty;
        Ok(agent)
    }

    fn checked_index(&self, coord: Coord) -> GridResult<usize> {
        if self.contains(coord) {
            Ok(coord.index(self.width))
        } else {
            Err(GridError::OutOfBounds { coord, height: self.height, width: self.width })
        }
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    /// # Panics
    /// Panics if `coord` is out of bounds.
    #[inline]
    fn index(&self, coord: Coord) -> &Cell {
        assert!(self.contains(coord), "cell {coord} out of bounds");
        &self.cells[coord.index(self.width)]
    }
}

/// Narrow a `width × height` shape given as lengths to `u32` and check it.
/// A side that does not fit in `u32` reports the real lengths as too large.
pub(crate) fn shape_from_lens(width: usize, height: usize) -> GridResult<(u32, u32)> {
    let too_large = || ConfigError::GridTooLarge { width: width as u64, height: height as u64 };
    let w = u32::try_from(width).map_err(|_| too_large())?;
    let h = u32::try_from(height).map_err(|_| too_large())?;
    check_dimensions(w, h)?;
    Ok((w, h))
}

fn check_dimensions(width: u32, height: u32) -> GridResult<()> {
    if width == 0 {
        return Err(ConfigError::InvalidDimension { what: "width", value: 0 }.into());
    }
    if height == 0 {
        return Err(ConfigError::InvalidDimension { what: "height", value: 0 }.into());
    }
    if width as u64 * height as u64 > u32::MAX as u64 {
        return Err(ConfigError::GridTooLarge { width: width.into(), height: height.into() }.into());
    }
    Ok(())
}
