//! Application state and logic.

use super::input::{Action, action_for};
use crate::Locale;
use crossterm::event::KeyCode;
use derive_getters::Getters;
use solo_tictactoe::{GameEngine, Position, Turn};
use tracing::{debug, instrument};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    engine: GameEngine,
    cursor: Position,
    locale: Locale,
    last_turn: Option<Turn>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around an engine.
    pub fn new(engine: GameEngine, locale: Locale) -> Self {
        Self {
            engine,
            cursor: Position::Center,
            locale,
            last_turn: None,
            should_quit: false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = action_for(self.cursor, key) else {
            return;
        };
        debug!(?action, "Key mapped");

        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::PlayCursor => self.play(self.cursor),
            Action::Play(pos) => {
                self.cursor = pos;
                self.play(pos);
            }
            Action::Restart => self.restart(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Plays a cell if the board accepts input.
    pub fn play(&mut self, pos: Position) {
        if !self.cells_enabled() {
            debug!(position = %pos, "Board locked, ignoring move");
            return;
        }

        if let Some(turn) = self.engine.apply_player_move(pos.to_index()) {
            debug!(%turn, "Turn applied to UI state");
            self.last_turn = Some(turn);
        }
    }

    /// Restarts the game unless nothing has been played yet.
    pub fn restart(&mut self) {
        if !self.can_restart() {
            debug!("Board already empty, restart disabled");
            return;
        }

        self.engine.reset();
        self.cursor = Position::Center;
        self.last_turn = None;
    }

    /// The restart control is available once a cell has been played.
    pub fn can_restart(&self) -> bool {
        !self.engine.is_board_empty()
    }

    /// Cells accept input until the game is decided.
    pub fn cells_enabled(&self) -> bool {
        !self.engine.outcome().is_over()
    }

    /// Text for the status area.
    pub fn status_message(&self) -> &'static str {
        self.locale
            .outcome(self.engine.outcome())
            .unwrap_or_else(|| self.locale.your_move())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solo_tictactoe::{Cell, Outcome};

    fn app() -> App {
        App::new(GameEngine::with_seed(11), Locale::En)
    }

    #[test]
    fn test_restart_disabled_on_empty_board() {
        let mut app = app();
        assert!(!app.can_restart());
        app.handle_key(KeyCode::Char('r'));
        assert!(app.engine().is_board_empty());
    }

    #[test]
    fn test_enter_plays_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);

        assert_eq!(app.engine().board().get(Position::TopCenter), Cell::Player);
        assert_eq!(app.last_turn().map(|t| t.player), Some(Position::TopCenter));
        assert!(app.can_restart());
    }

    #[test]
    fn test_digit_plays_and_moves_cursor() {
        let mut app = app();
        app.handle_key(KeyCode::Char('7'));

        assert_eq!(app.cursor(), &Position::BottomLeft);
        assert_eq!(app.engine().board().get(Position::BottomLeft), Cell::Player);
    }

    #[test]
    fn test_restart_clears_game() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));

        assert!(app.engine().is_board_empty());
        assert_eq!(app.cursor(), &Position::Center);
        assert!(app.last_turn().is_none());
        assert_eq!(app.status_message(), "Your move");
    }

    #[test]
    fn test_game_runs_to_a_result() {
        let mut app = app();
        for _ in 0..5 {
            if let Some(pos) = app.engine().board().empty_positions().first().copied() {
                app.play(pos);
            }
        }

        assert!(!app.cells_enabled());
        assert_ne!(app.engine().outcome(), Outcome::InProgress);
        assert_ne!(app.status_message(), "Your move");

        let board = *app.engine().board();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.engine().board(), &board);
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(*app.should_quit());
    }
}
