//! Typed board positions.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    #[display("Top-left")]
    TopLeft,
    /// Top-center (position 1)
    #[display("Top-center")]
    TopCenter,
    /// Top-right (position 2)
    #[display("Top-right")]
    TopRight,
    /// Middle-left (position 3)
    #[display("Middle-left")]
    MiddleLeft,
    /// Center (position 4)
    #[display("Center")]
    Center,
    /// Middle-right (position 5)
    #[display("Middle-right")]
    MiddleRight,
    /// Bottom-left (position 6)
    #[display("Bottom-left")]
    BottomLeft,
    /// Bottom-center (position 7)
    #[display("Bottom-center")]
    BottomCenter,
    /// Bottom-right (position 8)
    #[display("Bottom-right")]
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Creates a position from a board index, `None` outside 0-8.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates a position from zero-based row and column.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// Converts the position to its board index.
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % 3
    }
}
