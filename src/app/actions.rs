//! Actions representing side effects to be executed by the runtime.
//!
//! The controller itself never touches the terminal, the filesystem or child
//! processes. Handling an event mutates [`AppState`](super::AppState) and
//! returns the side effects the runtime must perform, in order.
//!
//! # Example
//!
//! ```rust
//! use pkgview::app::Action;
//!
//! let actions = vec![Action::Exec {
//!     command: "sudo pacman -S bash zsh".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

/// Side effects produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Leave the main loop.
    Quit,

    /// Re-read configuration and catalog, then feed the result back as
    /// [`Event::CatalogLoaded`](super::Event::CatalogLoaded).
    Reload,

    /// Run a shell command synchronously with the screen suspended.
    ///
    /// `%p` has already been replaced with the queued package names.
    Exec {
        /// Command line handed to the shell.
        command: String,
    },
}
