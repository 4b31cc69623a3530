//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use solo_tictactoe::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to another cell.
    Cursor(Position),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a specific cell.
    Play(Position),
    /// Start a new game.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action, given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c) if c.is_ascii_digit() => digit_position(c).map(Action::Play),
        other => {
            let next = move_cursor(cursor, other);
            (next != cursor).then_some(Action::Cursor(next))
        }
    }
}

/// Moves the cursor with arrow keys or `hjkl`, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        _ => return cursor,
    };

    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Keys `1`-`9` address the cells in reading order.
fn digit_position(c: char) -> Option<Position> {
    let digit = c.to_digit(10)? as usize;
    digit.checked_sub(1).and_then(Position::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('j')), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
    }

    #[test]
    fn test_digits_map_to_cells() {
        assert_eq!(
            action_for(Position::Center, KeyCode::Char('1')),
            Some(Action::Play(Position::TopLeft))
        );
        assert_eq!(
            action_for(Position::Center, KeyCode::Char('9')),
            Some(Action::Play(Position::BottomRight))
        );
        assert_eq!(action_for(Position::Center, KeyCode::Char('0')), None);
    }

    #[test]
    fn test_other_actions() {
        assert_eq!(action_for(Position::Center, KeyCode::Enter), Some(Action::PlayCursor));
        assert_eq!(action_for(Position::Center, KeyCode::Char('r')), Some(Action::Restart));
        assert_eq!(action_for(Position::Center, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(Position::TopLeft, KeyCode::Left), None);
        assert_eq!(action_for(Position::Center, KeyCode::Tab), None);
    }
}
