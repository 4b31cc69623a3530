//! Turn resolution for a single human player against a computer opponent.
//!
//! [`GameEngine`] owns the board and the outcome together, so every call
//! leaves them consistent with each other. A call to
//! [`GameEngine::apply_player_move`] resolves a whole turn:
//!
//! 1. the player's mark is placed,
//! 2. a player line ends the game, a full board is a draw,
//! 3. otherwise the opponent marks one empty cell,
//! 4. an opponent line ends the game, a full board is a draw.
//!
//! Moves that cannot be played are ignored rather than reported as errors.

use crate::opponent::{Opponent, RandomOpponent};
use crate::rules::win::{has_line, winning_line};
use crate::{Board, Cell, Mark, Outcome, Position};
use derive_more::Display;
use tracing::{debug, info, instrument, warn};

/// What happened during one accepted turn.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display("player {player}, opponent {opponent:?}, {outcome}")]
pub struct Turn {
    /// Cell marked by the player.
    pub player: Position,
    /// Cell marked by the opponent, `None` when the player's move ended the game.
    pub opponent: Option<Position>,
    /// Outcome after the turn.
    pub outcome: Outcome,
}

/// Game engine holding the board, the outcome and the opponent.
#[derive(Debug, Clone)]
pub struct GameEngine<O = RandomOpponent> {
    board: Board,
    outcome: Outcome,
    opponent: O,
}

impl GameEngine<RandomOpponent> {
    /// Creates a new game against an entropy-seeded random opponent.
    #[instrument]
    pub fn new() -> Self {
        Self::with_opponent(RandomOpponent::new())
    }

    /// Creates a new game against a deterministic random opponent.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_opponent(RandomOpponent::seeded(seed))
    }
}

impl Default for GameEngine<RandomOpponent> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Opponent> GameEngine<O> {
    /// Creates a new game against the given opponent.
    pub fn with_opponent(opponent: O) -> Self {
        Self {
            board: Board::new(),
            outcome: Outcome::InProgress,
            opponent,
        }
    }

    /// Resumes a game from an arbitrary board.
    ///
    /// The outcome is derived from the board: a player line wins first, then
    /// an opponent line, then a full board is a draw.
    #[instrument(skip(board, opponent), fields(board = %board.display()))]
    pub fn from_board(board: Board, opponent: O) -> Self {
        let outcome = if has_line(&board, Cell::Player) {
            Outcome::PlayerWins
        } else if has_line(&board, Cell::Opponent) {
            Outcome::OpponentWins
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        debug!(%outcome, "Derived outcome for resumed board");

        Self {
            board,
            outcome,
            opponent,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the opponent.
    pub fn opponent(&self) -> &O {
        &self.opponent
    }

    /// True when no cell has been played.
    pub fn is_board_empty(&self) -> bool {
        self.board.is_empty()
    }

    /// True when no empty cell remains.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Checks whether `mark` holds three in a row.
    pub fn check_win(&self, mark: Mark) -> bool {
        has_line(&self.board, mark.cell())
    }

    /// Returns the line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome
            .winner()
            .and_then(|mark| winning_line(&self.board, mark.cell()))
    }

    /// Plays the player's mark at `index` (0-8) and resolves the turn.
    ///
    /// Returns `None` without touching the game when the game is over, the
    /// cell is taken or the index is off the board.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn apply_player_move(&mut self, index: usize) -> Option<Turn> {
        if self.outcome.is_over() {
            debug!("Game is over, ignoring move");
            return None;
        }

        let Some(pos) = Position::from_index(index) else {
            debug!("Index off the board, ignoring move");
            return None;
        };

        if !self.board.is_empty_at(pos) {
            debug!(position = %pos, "Cell occupied, ignoring move");
            return None;
        }

        self.board.set(pos, Cell::Player);

        if let Some(outcome) = self.settle(Mark::Player) {
            info!(position = %pos, %outcome, "Player move ended the game");
            return Some(Turn {
                player: pos,
                opponent: None,
                outcome,
            });
        }

        let reply = self.opponent_reply();
        self.board.set(reply, Cell::Opponent);

        let outcome = self.settle(Mark::Opponent).unwrap_or(Outcome::InProgress);
        info!(position = %pos, reply = %reply, %outcome, "Turn resolved");

        Some(Turn {
            player: pos,
            opponent: Some(reply),
            outcome,
        })
    }

    /// Clears the board and starts a new game.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        info!("Game reset");
    }

    /// Records the outcome after `mark` has moved, if the game is decided.
    fn settle(&mut self, mark: Mark) -> Option<Outcome> {
        let outcome = if self.check_win(mark) {
            Outcome::won_by(mark)
        } else if self.board.is_full() {
            Outcome::Draw
        } else {
            return None;
        };

        self.outcome = outcome;
        Some(outcome)
    }

    /// Asks the opponent for a cell, keeping it to empty cells.
    ///
    /// Only called while at least one cell is empty.
    fn opponent_reply(&mut self) -> Position {
        let candidates = self.board.empty_positions();
        let fallback = candidates[0];

        match self.opponent.choose(&self.board, &candidates) {
            Some(pos) if candidates.contains(&pos) => pos,
            other => {
                warn!(
                    opponent = self.opponent.name(),
                    proposed = ?other,
                    fallback = %fallback,
                    "Opponent proposed an unplayable cell"
                );
                fallback
            }
        }
    }
}
