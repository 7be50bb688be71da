//! Terminal backend abstraction and crossterm implementation.
//!
//! Entering puts the terminal in raw mode on the alternate screen and sets the
//! window title; leaving undoes both. [`TerminalGuard`] leaves on drop so the
//! terminal is restored on early return, error propagation and panic unwind.

use anyhow::{Context, Result};
use crossterm::{
    cursor::{MoveTo, Show},
    execute,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::stdout;
use tracing::{debug, warn};

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Full terminal size as `(cols, rows)`.
    fn size(&self) -> Result<(u16, u16)>;
}

/// Enter `backend`, set its title, and return a guard that leaves on drop.
pub fn enter_guard<'a, B: TerminalBackend>(
    backend: &'a mut B,
    title: &str,
) -> Result<TerminalGuard<'a, B>> {
    backend.enter()?;
    let mut guard = TerminalGuard { backend };
    guard.backend.set_title(title)?;
    Ok(guard)
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a, B: TerminalBackend> {
    backend: &'a mut B,
}

impl<B: TerminalBackend> TerminalGuard<'_, B> {
    pub fn backend(&self) -> &B {
        self.backend
    }
}

impl<B: TerminalBackend> Drop for TerminalGuard<'_, B> {
    fn drop(&mut self) {
        if let Err(e) = self.backend.leave() {
            warn!(target: "runtime", error = %e, "terminal_restore_failed");
        }
    }
}

#[derive(Debug, Default)]
pub struct CrosstermBackend {
    entered: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if !self.entered {
            enable_raw_mode().context("enabling raw mode")?;
            execute!(stdout(), EnterAlternateScreen).context("entering alternate screen")?;
            self.entered = true;
            debug!(target: "runtime", "terminal_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if self.entered {
            execute!(
                stdout(),
                Clear(ClearType::All),
                MoveTo(0, 0),
                Show,
                LeaveAlternateScreen
            )?;
            disable_raw_mode()?;
            self.entered = false;
            debug!(target: "runtime", "terminal_left");
        }
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        crossterm::terminal::size().context("querying terminal size")
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
