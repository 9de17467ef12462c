//! Terminal event loop.
//!
//! The runtime is the only layer performing I/O. It loads configuration and
//! catalog, owns the terminal, and runs a single-threaded, poll-driven loop:
//!
//! ```text
//! loop {
//!     check resize flag → relayout (fatal below minimum size)
//!     render
//!     poll input (50 ms) → handle_event → perform actions
//! }
//! ```
//!
//! Exec and reload block the loop until they finish.
//!
//! # Modules
//!
//! - [`exec`]: Shell command execution
//! - [`keys`]: crossterm key decoding
//! - [`resize`]: Resize notification flag
//! - [`terminal`]: Raw mode and alternate screen guard

pub mod exec;
pub mod keys;
pub mod resize;
pub mod terminal;

use crate::app::{handle_event, Action, AppState, Event, Key};
use crate::catalog::{CatalogSource, JsonCatalog};
use crate::domain::error::Result;
use crate::ui::{CrosstermScreen, Display, Screen};
use crate::{initialize, Config};
use crossterm::event::{self, Event as TerminalEvent};
use exec::{ProcessRunner, ShellRunner};
use resize::ResizeFlag;
use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use terminal::TerminalSession;

/// Input poll timeout per loop iteration.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// List footer shown while a filter runs.
pub const PROCESSING_MESSAGE: &str = "Processing...";

/// Command line choices that survive reloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Configuration file given on the command line.
    pub config_path: Option<PathBuf>,
    /// Catalog overriding the configured one.
    pub catalog: Option<PathBuf>,
}

/// Reads configuration and catalog.
///
/// # Returns
///
/// The configuration and the [`Event::CatalogLoaded`] carrying the catalog
/// and macro table.
///
/// # Errors
///
/// Returns an error if the configuration or the catalog cannot be loaded.
pub fn load_session(options: &Options) -> Result<(Config, Event)> {
    let _span = tracing::debug_span!("load_session").entered();

    let config = Config::load(options.config_path.as_deref())?;
    let path = options
        .catalog
        .clone()
        .unwrap_or_else(|| config.catalog_path());
    let packages = JsonCatalog::new(path).load()?;
    let event = Event::CatalogLoaded {
        packages,
        macros: config.macros.clone(),
    };
    Ok((config, event))
}

/// Runs the browser until the user quits.
///
/// `config` and `loaded` come from [`load_session`], so catalog errors are
/// reported before the terminal is taken over.
///
/// # Errors
///
/// Returns fatal errors: terminal failures, a terminal below the minimum
/// size, or a catalog that fails to reload.
pub fn run(options: &Options, config: &Config, loaded: Event) -> Result<()> {
    let (mut state, theme) = initialize(config);
    let resize = ResizeFlag::new();

    let _session = TerminalSession::enter()?;
    let mut display = Display::new(CrosstermScreen::new(io::stdout()), theme)?;
    display.reposition(&mut state);
    let mut runner = ShellRunner::new(config.shell.clone());

    tracing::info!(catalog = ?options.catalog, "pkgview started");

    let actions = handle_event(&mut state, &loaded);
    let mut quit = perform(actions, &mut state, &mut display, &mut runner, |runner: &mut ShellRunner| {
        reload(options, runner)
    })?;

    while !quit {
        display.check_resize(&resize, &mut state)?;
        display.render(&state)?;

        if !event::poll(POLL_TIMEOUT)? {
            continue;
        }
        match event::read()? {
            TerminalEvent::Key(key_event) => {
                let Some(key) = keys::decode(key_event) else {
                    continue;
                };
                if key == Key::Enter && state.commits_filter() {
                    state.set_list_footer(PROCESSING_MESSAGE);
                    display.render(&state)?;
                }
                let actions = handle_event(&mut state, &Event::Key(key));
                quit = perform(actions, &mut state, &mut display, &mut runner, |runner: &mut ShellRunner| {
                    reload(options, runner)
                })?;
            }
            TerminalEvent::Resize(cols, rows) => {
                tracing::trace!(cols, rows, "resize reported");
                resize.raise();
            }
            _ => {}
        }
    }

    tracing::info!("pkgview exiting");
    Ok(())
}

fn reload(options: &Options, runner: &mut ShellRunner) -> Result<Event> {
    let (config, event) = load_session(options)?;
    runner.set_shell(config.shell);
    Ok(event)
}

/// Executes actions in order, including actions produced by reloads.
///
/// # Returns
///
/// `true` once [`Action::Quit`] was seen; remaining actions are dropped.
///
/// # Errors
///
/// Returns fatal errors from reloading or redrawing. A command that fails to
/// start is reported in the status bar instead.
pub fn perform<S, P, R>(
    actions: Vec<Action>,
    state: &mut AppState,
    display: &mut Display<S>,
    runner: &mut P,
    mut reload: R,
) -> Result<bool>
where
    S: Screen,
    P: ProcessRunner,
    R: FnMut(&mut P) -> Result<Event>,
{
    let mut pending: VecDeque<Action> = actions.into();
    while let Some(action) = pending.pop_front() {
        tracing::debug!(?action, "performing action");
        match action {
            Action::Quit => return Ok(true),
            Action::Reload => {
                let event = reload(runner)?;
                pending.extend(handle_event(state, &event));
            }
            Action::Exec { command } => {
                if let Err(e) = runner.run(&command) {
                    tracing::warn!(error = %e, "command failed");
                    state.set_status(e.to_string());
                }
                display.relayout(state)?;
            }
        }
    }
    Ok(false)
}
