//! Raw-mode terminal session.
//!
//! [`TerminalSession`] switches the terminal into raw mode on the alternate
//! screen and restores it when dropped, so fatal errors never leave the
//! user's terminal unusable. [`suspend`] and [`resume`] hand the terminal
//! to a child process and take it back.

use crate::domain::error::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io;

/// Guard owning the raw-mode terminal.
#[derive(Debug)]
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Enters raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses raw mode.
    pub fn enter() -> Result<Self> {
        resume()?;
        tracing::debug!("terminal session started");
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = suspend() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
        tracing::debug!("terminal session ended");
    }
}

/// Returns the terminal to cooked mode on the main screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be written.
pub fn suspend() -> Result<()> {
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Switches to raw mode on the alternate screen.
///
/// # Errors
///
/// Returns an error if the terminal cannot be written.
pub fn resume() -> Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, Hide)?;
    Ok(())
}
