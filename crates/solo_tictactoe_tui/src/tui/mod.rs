//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::App;
pub use input::{Action, action_for, move_cursor};
pub use terminal::TerminalGuard;

use crate::AppConfig;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use solo_tictactoe::GameEngine;
use std::io;
use tracing::{error, info, instrument};

/// Runs the interactive game until the player quits.
#[instrument(skip_all, fields(seed = ?config.seed(), locale = %config.locale()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let engine = match config.seed() {
        Some(seed) => GameEngine::with_seed(*seed),
        None => GameEngine::new(),
    };
    info!(seed = ?engine.opponent().seed(), "Opponent ready");
    let mut app = App::new(engine, *config.locale());

    let mut guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, &mut app);

    guard.restore();
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(outcome = %app.engine().outcome(), "TUI closed");

    res
}

/// Draw, wait for a key, update; repeat until quit.
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }

        if *app.should_quit() {
            info!("User quit");
            return Ok(());
        }
    }
}
