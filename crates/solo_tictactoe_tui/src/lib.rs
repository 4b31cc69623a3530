//! Terminal client for single-player tic-tac-toe.
//!
//! - **Config**: TOML file with command-line overrides
//! - **Locale**: on-screen text in English or Russian
//! - **TUI**: ratatui board driven by [`solo_tictactoe::GameEngine`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod locale;
mod tui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use locale::Locale;
pub use tui::{Action, App, TerminalGuard, action_for, move_cursor, run_tui};
