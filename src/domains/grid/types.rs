use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid position addressed by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, `None` when the result would be negative.
    pub fn offset(self, delta: (isize, isize)) -> Option<Coord> {
        let row = self.row.checked_add_signed(delta.0)?;
        let col = self.col.checked_add_signed(delta.1)?;
        Some(Coord { row, col })
    }

    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Open,
    Obstacle,
    /// Spreading terrain (e.g. flood water). Never reverts to `Open`.
    Hazard,
    Goal,
    Start,
}

impl Cell {
    pub fn is_obstacle(&self) -> bool {
        matches!(self, Cell::Obstacle)
    }

    pub fn is_passable(&self) -> bool {
        !matches!(self, Cell::Obstacle | Cell::Hazard)
    }
}

/// Right, down, up, left.
pub const FOUR_WAY: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

/// `FOUR_WAY` visited back to front.
pub const FOUR_WAY_REVERSED: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
