//! Cell states of the segregation grid.

use serde::{Deserialize, Serialize};

/// Content of a single grid location.
///
/// Cells are compared by value; two agents are "alike" exactly when their
/// variants are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// A red agent.
    Red,
    /// A blue agent.
    Blue,
    /// An unoccupied location.
    #[default]
    Empty,
}

impl Cell {
    /// All variants, in the order used for category sampling.
    pub const ALL: [Cell; 3] = [Cell::Red, Cell::Blue, Cell::Empty];

    /// Returns `true` for `Red` and `Blue`.
    pub fn is_agent(self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` for `Empty`.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}
