//! Application layer coordinating state, events, and actions.
//!
//! This module is the modal input controller. It sits between the terminal
//! runtime and the domain layer and never performs I/O itself.
//!
//! # Architecture
//!
//! ```text
//! Key press → Event → handle_event → State mutations → Actions → Runtime
//!                ↑                                                  │
//!                └──────────── CatalogLoaded (reload) ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effects emitted by the event handler
//! - [`commands`]: The filter, sort, search, color, exec and macro handlers
//! - [`filter`]: Attribute selection and match predicates
//! - [`handler`]: Key dispatch per mode
//! - [`history`]: Per-operation command recall
//! - [`input`]: Line editing buffer
//! - [`modes`]: Mode, operation and focus types
//! - [`pane`]: Scroll and focus state of a list
//! - [`state`]: Central state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use pkgview::app::{handle_event, AppState, Event, Key};
//! use pkgview::domain::Package;
//! use std::collections::BTreeMap;
//!
//! let mut state = AppState::new();
//! handle_event(
//!     &mut state,
//!     &Event::CatalogLoaded {
//!         packages: vec![Package::new("bash")],
//!         macros: BTreeMap::new(),
//!     },
//! );
//! let actions = handle_event(&mut state, &Event::Key(Key::Char('q')));
//! assert_eq!(actions.len(), 1);
//! ```

pub mod actions;
pub mod commands;
pub mod filter;
pub mod handler;
pub mod history;
pub mod input;
pub mod modes;
pub mod pane;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event, Key};
pub use modes::{Focus, Mode, Operation};
pub use state::{AppState, MacroTable};
