//! Agent category tags.
//!
//! An agent carries nothing but its category.  Agents are `Copy` and are moved
//! between grid cells by value; the grid never creates or destroys them after
//! initialization.

/// The two population groups of the Schelling model.
///
/// Rendered as `R` (category A) and `B` (category B) to match the classic
/// red/blue presentation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    A,
    B,
}

impl Category {
    /// Single-character symbol used by text renderers and output rows.
    pub fn symbol(self) -> char {
        match self {
            Category::A => 'R',
            Category::B => 'B',
        }
    }

    /// Label for CSV/SQLite state columns.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::A => "a",
            Category::B => "b",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resident of the city.  Immutable once created.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    category: Category,
}

impl Agent {
    #[inline]
    pub const fn new(category: Category) -> Self {
        Self { category }
    }

    #[inline]
    pub fn category(self) -> Category {
        self.category
    }

    /// `true` if both agents belong to the same category.
    #[inline]
    pub fn is_similar(self, other: Agent) -> bool {
        self.category == other.category
    }
}
