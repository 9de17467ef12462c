//! Event handling and state transition logic.
//!
//! This module implements the modal input controller: it takes decoded key
//! presses and catalog reloads, mutates [`AppState`] and returns the side
//! effects for the runtime to execute.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The runtime decodes a terminal event into an [`Event`]
//! 2. [`handle_event`] dispatches on the current [`Mode`]
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Example
//!
//! ```rust
//! use pkgview::app::{handle_event, AppState, Event, Key, Mode};
//!
//! let mut state = AppState::new();
//! handle_event(&mut state, &Event::Key(Key::Char('/')));
//! assert_eq!(state.mode, Mode::Input);
//! ```

use super::actions::Action;
use super::modes::{Focus, Mode, Operation};
use super::state::{AppState, MacroTable};
use crate::domain::Package;

/// Terminal-independent key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Tab,
    Enter,
    Esc,
    Backspace,
    Delete,
}

/// Events consumed by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(Key),

    /// A fresh catalog and macro table, delivered at startup and after
    /// [`Action::Reload`].
    CatalogLoaded {
        /// Every package of the catalog.
        packages: Vec<Package>,
        /// Macro table from the configuration.
        macros: MacroTable,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// Side effects to run in order. Usually empty: most events only change
/// state, which the next render picks up.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event and the current mode.
pub fn handle_event(state: &mut AppState, event: &Event) -> Vec<Action> {
    match event {
        Event::CatalogLoaded { packages, macros } => {
            state.load_catalog(packages.clone(), macros.clone())
        }
        Event::Key(key) => {
            let _span =
                tracing::debug_span!("handle_event", ?key, mode = ?state.mode).entered();
            state.status = None;
            match state.mode {
                Mode::Standard => handle_standard_key(state, *key),
                Mode::Input => handle_input_key(state, *key),
                Mode::Help => {
                    state.mode = Mode::Standard;
                    vec![]
                }
            }
        }
    }
}

fn handle_standard_key(state: &mut AppState, key: Key) -> Vec<Action> {
    let page = isize::try_from(state.page_height()).unwrap_or(isize::MAX);
    match key {
        Key::Up | Key::Char('k') => state.focused_pane_mut().move_by(-1),
        Key::Down | Key::Char('j') => state.focused_pane_mut().move_by(1),
        Key::PageUp => state.focused_pane_mut().move_by(-page),
        Key::PageDown => state.focused_pane_mut().move_by(page),
        Key::Home => state.focused_pane_mut().move_abs(0),
        Key::End => state.focused_pane_mut().move_to_end(),
        Key::Tab => {
            let next = match state.focus() {
                Focus::List => Focus::Queue,
                Focus::Queue => Focus::List,
            };
            state.set_focus(next);
        }
        Key::Right => state.enqueue_focused(),
        Key::Left => state.dequeue_focused(),
        Key::Char('C') => state.clear_queue(),
        Key::Char('c') => state.clear_filter(),
        Key::Char('h') => state.mode = Mode::Help,
        Key::Char('q') => return vec![Action::Quit],
        Key::Char('r') => return vec![Action::Reload],
        Key::Char('n') => enter_input(state, Operation::Filter, "n:"),
        Key::Char('d') => enter_input(state, Operation::Filter, "d:"),
        Key::Char(c) if c.is_ascii_digit() => {
            return state.apply_command(Operation::Macro, c.encode_utf8(&mut [0; 4]));
        }
        Key::Char(c) => match Operation::from_char(c) {
            Operation::None => tracing::trace!(key = %c, "unbound key"),
            op => enter_input(state, op, ""),
        },
        Key::Enter | Key::Esc | Key::Backspace | Key::Delete => {}
    }
    vec![]
}

fn enter_input(state: &mut AppState, op: Operation, seed: &str) {
    state.mode = Mode::Input;
    state.pending = op;
    state.input.set(seed);
    if let Some(history) = state.histories.get_mut(op) {
        history.reset();
    }
}

fn leave_input(state: &mut AppState) {
    state.mode = Mode::Standard;
    state.pending = Operation::None;
    state.input.clear();
}

fn handle_input_key(state: &mut AppState, key: Key) -> Vec<Action> {
    match key {
        Key::Esc => leave_input(state),
        Key::Enter => {
            let op = state.pending;
            let text = state.input.take();
            leave_input(state);
            if !text.is_empty() {
                tracing::debug!(?op, text = %text, "committing input");
                return state.apply_command(op, &text);
            }
        }
        Key::Delete => state.input.delete(),
        Key::Backspace => state.input.backspace(),
        Key::Left => state.input.move_left(),
        Key::Right => state.input.move_right(),
        Key::Home => state.input.move_start(),
        Key::End => state.input.move_end(),
        Key::Up | Key::Down => {
            if let Some(history) = state.histories.get_mut(state.pending) {
                if !history.is_empty() {
                    let text = if key == Key::Up {
                        history.move_back()
                    } else {
                        history.move_forward()
                    };
                    state.input.set(&text);
                }
            }
        }
        Key::Char(c) => state.input.insert(c),
        Key::Tab | Key::PageUp | Key::PageDown => {}
    }
    vec![]
}
