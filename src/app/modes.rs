//! Mode, operation and focus types for the controller state machine.
//!
//! # State Machine
//!
//! The controller is always in one [`Mode`]:
//! - **Standard**: navigation, queueing and single-key commands
//! - **Input**: a line of text is being edited for a pending [`Operation`]
//! - **Help**: the static help screen; any key leaves it
//!
//! # Example
//!
//! ```rust
//! use pkgview::app::modes::{Mode, Operation};
//!
//! let mode = Mode::Input;
//! assert_eq!(Operation::from_char('/'), Operation::Filter);
//! assert_ne!(mode, Mode::Standard);
//! ```

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Default navigation and command mode.
    #[default]
    Standard,

    /// Text entry for the pending operation.
    ///
    /// Character keys edit the input buffer, up/down browse the history of
    /// the pending operation, Enter commits and Escape cancels.
    Input,

    /// Static help screen. Any key returns to [`Mode::Standard`].
    Help,
}

/// Operation a line of input is destined for.
///
/// The same operation kinds are used by interactive input and by macro
/// commands, whose first character selects the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operation {
    Filter,
    Sort,
    Search,
    ColorCode,
    Exec,
    Macro,
    #[default]
    None,
}

impl Operation {
    /// Every real operation, in history order.
    pub const ALL: [Self; 6] = [
        Self::Filter,
        Self::Sort,
        Self::Search,
        Self::ColorCode,
        Self::Exec,
        Self::Macro,
    ];

    /// Key that enters input mode for this operation, also used as the
    /// prompt and as the selector character of macro commands.
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        match self {
            Self::Filter => Some('/'),
            Self::Sort => Some('.'),
            Self::Search => Some('?'),
            Self::ColorCode => Some(';'),
            Self::Exec => Some('!'),
            Self::Macro => Some('@'),
            Self::None => None,
        }
    }

    /// Maps a selector character to its operation, [`Operation::None`] if
    /// the character selects nothing.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self::ALL
            .into_iter()
            .find(|op| op.to_char() == Some(c))
            .unwrap_or(Self::None)
    }

    /// Prompt shown in front of the input line.
    #[must_use]
    pub fn prompt(self) -> String {
        self.to_char().map(String::from).unwrap_or_default()
    }

    /// Slot of this operation in per-operation tables.
    #[must_use]
    pub const fn slot(self) -> Option<usize> {
        match self {
            Self::Filter => Some(0),
            Self::Sort => Some(1),
            Self::Search => Some(2),
            Self::ColorCode => Some(3),
            Self::Exec => Some(4),
            Self::Macro => Some(5),
            Self::None => None,
        }
    }
}

/// Which list pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The filtered package view.
    #[default]
    List,
    /// The batch queue.
    Queue,
}
