use serde::{Serialize, Deserialize};

use crate::config::game::{BOARD_ROWS, BOARD_COLS};

/// A square coordinate. Row 0 is the top of the board, row 19 the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Convert request coordinates into a board position.
    /// Returns `None` for anything off the board, negative values included.
    pub fn checked(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok().filter(|r| *r < BOARD_ROWS)?;
        let col = usize::try_from(col).ok().filter(|c| *c < BOARD_COLS)?;
        Some(Self { row, col })
    }

    pub fn row_diff(self, other: Position) -> usize {
        self.row.abs_diff(other.row)
    }

    pub fn col_diff(self, other: Position) -> usize {
        self.col.abs_diff(other.col)
    }
}

/// Index of an animal in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub usize);

/// Index of a creature in the creature list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CreatureId(pub usize);

/// What the active animal may do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Move,
    Spell,
}

/// Result of a move or spell request as seen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub accepted: bool,
    pub status: String,
}
