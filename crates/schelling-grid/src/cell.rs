//! Grid cell contents.

use schelling_core::{Agent, Category};

/// One grid cell.  Every cell is either vacant or holds exactly one agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Agent),
}

impl Cell {
    /// Shorthand for `Cell::Occupied(Agent::new(category))`.
    #[inline]
    pub const fn of(category: Category) -> Cell {
        Cell::Occupied(Agent::new(category))
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn agent(self) -> Option<Agent> {
        match self {
            Cell::Empty       => None,
            Cell::Occupied(a) => Some(a),
        }
    }

    #[inline]
    pub fn category(self) -> Option<Category> {
        self.agent().map(Agent::category)
    }

    /// Label for CSV/SQLite state columns: `empty`, `a`, or `b`.
    pub fn as_str(self) -> &'static str {
        match self {
            Cell::Empty       => "empty",
            Cell::Occupied(a) => a.category().as_str(),
        }
    }

    /// Single-character symbol: `.` for vacancies, else the category symbol.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty       => '.',
            Cell::Occupied(a) => a.category().symbol(),
        }
    }
}
