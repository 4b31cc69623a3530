//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Position};
use tracing::instrument;

/// The 8 lines that end the game: rows, columns, then diagonals.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line whose three cells all equal `cell`.
///
/// Asking for [`Cell::Empty`] always yields `None`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, cell: Cell) -> Option<[Position; 3]> {
    if cell == Cell::Empty {
        return None;
    }

    WIN_LINES
        .into_iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == cell))
}

/// Checks whether `cell` holds three in a row anywhere on the board.
pub fn has_line(board: &Board, cell: Cell) -> bool {
    winning_line(board, cell).is_some()
}
