//! Draw detection logic for tic-tac-toe.

use super::win::has_line;
use crate::{Board, Cell};
use tracing::instrument;

/// A full board on which neither side holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_line(board, Cell::Player) && !has_line(board, Cell::Opponent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell::{Empty as E, Opponent as O, Player as P};

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_cells([P, O, P, O, P, P, O, P, E]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_cells([P, O, P, O, P, P, O, P, O]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // X X X / O O X / X O O
        let board = Board::from_cells([P, P, P, O, O, P, P, O, O]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
