//! Terminal mode management.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, instrument, warn};

/// Guard for raw mode and the alternate screen. Restores both on drop.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Enables raw mode and enters the alternate screen.
    ///
    /// If entering the alternate screen fails, the returned error is raised
    /// after raw mode has already been switched back off.
    #[instrument]
    pub fn enter() -> io::Result<Self> {
        let mut guard = Self::default();

        enable_raw_mode()?;
        guard.raw_mode = true;

        execute!(io::stdout(), EnterAlternateScreen)?;
        guard.alternate_screen = true;

        Ok(guard)
    }

    /// True while this guard still owns raw mode.
    pub fn raw_mode(&self) -> bool {
        self.raw_mode
    }

    /// True while this guard still owns the alternate screen.
    pub fn alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    /// Puts the terminal back the way it was. Safe to call more than once.
    pub fn restore(&mut self) {
        if self.raw_mode {
            debug!("Disabling raw mode");
            if let Err(e) = disable_raw_mode() {
                warn!(error = %e, "Failed to disable raw mode");
            }
            self.raw_mode = false;
        }

        if self.alternate_screen {
            debug!("Leaving alternate screen");
            if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
                warn!(error = %e, "Failed to leave alternate screen");
            }
            self.alternate_screen = false;
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
