//! Single-player tic-tac-toe against a random computer opponent.
//!
//! The crate holds the game state and resolves turns; rendering is left to
//! the caller.
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{Cell, GameEngine, Outcome, Position};
//!
//! let mut engine = GameEngine::with_seed(42);
//! let turn = engine.apply_player_move(4).expect("center is free");
//!
//! assert_eq!(engine.board().get(Position::Center), Cell::Player);
//! assert_eq!(engine.board().count(Cell::Opponent), 1);
//! assert_eq!(turn.outcome, Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod opponent;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, Turn};
pub use opponent::{Opponent, RandomOpponent};
pub use position::Position;
pub use types::{Board, Cell, Mark, Outcome};
