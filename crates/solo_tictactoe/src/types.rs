//! Core domain types for single-player tic-tac-toe.

use crate::Position;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Occupancy of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by the human player.
    Player,
    /// Marked by the computer opponent.
    Opponent,
}

impl Cell {
    /// Symbol used in plain-text renderings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Player => 'X',
            Cell::Opponent => 'O',
        }
    }
}

/// The side that owns a move.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// The human player (always moves first).
    Player,
    /// The computer opponent.
    Opponent,
}

impl Mark {
    /// Returns the cell value this mark writes onto the board.
    pub fn cell(self) -> Cell {
        match self {
            Mark::Player => Cell::Player,
            Mark::Opponent => Cell::Opponent,
        }
    }
}

/// Resolution state of the current game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves are still accepted.
    #[default]
    #[display("in progress")]
    InProgress,
    /// The player completed a line.
    #[display("player wins")]
    PlayerWins,
    /// The opponent completed a line.
    #[display("opponent wins")]
    OpponentWins,
    /// The board filled up with no line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Returns true once the game has been decided.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning side, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::PlayerWins => Some(Mark::Player),
            Outcome::OpponentWins => Some(Mark::Opponent),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Outcome produced by a line of the given mark.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Player => Outcome::PlayerWins,
            Mark::Opponent => Outcome::OpponentWins,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order, so `index = row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Creates a board from raw cells in row-major order.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.to_index()] = cell;
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the positions that are still empty, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty_at(*pos))
            .collect()
    }

    /// Counts cells holding the given value.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// True when no cell has been played.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::Empty)
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based key so the output doubles as a legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => result.push_str(&(index + 1).to_string()),
                    cell => result.push(cell.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
