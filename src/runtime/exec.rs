//! Process-execution collaborator.
//!
//! Exec commands run synchronously through the user's shell with the screen
//! suspended. The loop is blocked until the user acknowledges the output.

use crate::domain::error::{PkgviewError, Result};
use crate::runtime::terminal;
use std::io::{self, BufRead, Write};
use std::process::Command;

/// Prompt shown after a command finishes.
pub const CONTINUE_PROMPT: &str = "press return to continue...";

/// Runs command lines on behalf of the controller.
pub trait ProcessRunner {
    /// Runs `command` to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started or the terminal
    /// cannot be handed over.
    fn run(&mut self, command: &str) -> Result<()>;
}

/// Runs commands as `<shell> -ic <command>` on the real terminal.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: String,
}

impl ShellRunner {
    #[must_use]
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn set_shell(&mut self, shell: impl Into<String>) {
        self.shell = shell.into();
    }

    fn spawn(&self, command: &str) -> Result<()> {
        let status = Command::new(&self.shell)
            .arg("-ic")
            .arg(command)
            .status()
            .map_err(|e| PkgviewError::Command(format!("cannot run {}: {e}", self.shell)))?;
        tracing::info!(command, code = ?status.code(), "command finished");
        Ok(())
    }
}

impl ProcessRunner for ShellRunner {
    fn run(&mut self, command: &str) -> Result<()> {
        let _span = tracing::debug_span!("exec", shell = %self.shell, command).entered();
        handed_over(
            terminal::suspend,
            || {
                let outcome = self.spawn(command);
                let acknowledged = wait_for_return();
                outcome.and(acknowledged)
            },
            terminal::resume,
        )
    }
}

/// Runs `work` with the terminal released. Once `suspend` succeeded,
/// `resume` always runs; the first error is returned.
fn handed_over(
    suspend: impl FnOnce() -> Result<()>,
    work: impl FnOnce() -> Result<()>,
    resume: impl FnOnce() -> Result<()>,
) -> Result<()> {
    suspend()?;
    let outcome = work();
    let resumed = resume();
    outcome.and(resumed)
}

/// Shows [`CONTINUE_PROMPT`] and blocks until a line is read.
fn wait_for_return() -> Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout)?;
    write!(stdout, "{CONTINUE_PROMPT}")?;
    stdout.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn command_error(text: &str) -> PkgviewError {
        PkgviewError::Command(text.to_string())
    }

    #[test]
    fn terminal_is_resumed_when_work_fails() {
        let calls = RefCell::new(Vec::new());
        let result = handed_over(
            || {
                calls.borrow_mut().push("suspend");
                Ok(())
            },
            || {
                calls.borrow_mut().push("work");
                Err(command_error("stdin closed"))
            },
            || {
                calls.borrow_mut().push("resume");
                Ok(())
            },
        );
        assert!(matches!(result, Err(PkgviewError::Command(m)) if m == "stdin closed"));
        assert_eq!(*calls.borrow(), vec!["suspend", "work", "resume"]);
    }

    #[test]
    fn first_error_wins() {
        let result = handed_over(
            || Ok(()),
            || Err(command_error("spawn")),
            || Err(command_error("resume")),
        );
        assert!(matches!(result, Err(PkgviewError::Command(m)) if m == "spawn"));

        let result = handed_over(|| Ok(()), || Ok(()), || Err(command_error("resume")));
        assert!(matches!(result, Err(PkgviewError::Command(m)) if m == "resume"));
    }

    #[test]
    fn failed_suspend_skips_work() {
        let ran = RefCell::new(false);
        let result = handed_over(
            || Err(command_error("no tty")),
            || {
                *ran.borrow_mut() = true;
                Ok(())
            },
            || {
                *ran.borrow_mut() = true;
                Ok(())
            },
        );
        assert!(result.is_err());
        assert!(!*ran.borrow());
    }
}
