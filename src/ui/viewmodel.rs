//! View model types representing renderable UI state.
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data:
//! visible rows only, captions already resolved, placeholders already filled.

use crate::app::Mode;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Mode the controller is in; [`Mode::Help`] replaces the panes.
    pub mode: Mode,

    /// Title of the package list pane, with visible and total counts.
    pub list_title: String,
    /// Visible rows of the package list.
    pub list_rows: Vec<ListRow>,
    /// Whether the package list has input focus.
    pub list_focused: bool,
    /// Transient footer, e.g. while a filter runs.
    pub list_footer: Option<String>,

    /// Title of the queue pane.
    pub queue_title: String,
    /// Visible rows of the queue.
    pub queue_rows: Vec<ListRow>,
    /// Whether the queue has input focus.
    pub queue_focused: bool,

    /// Attribute lines of the focused package.
    pub info: Vec<InfoLine>,

    /// Status bar contents.
    pub status: StatusLine,

    /// Input line, present only in input mode.
    pub input: Option<InputLine>,
}

/// One visible row of a list pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// Package name.
    pub name: String,
    /// Color-coding palette slot.
    pub color_slot: usize,
    /// Whether this row holds the pane's cursor.
    pub is_selected: bool,
}

/// One `Caption: text` line of the info pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoLine {
    pub caption: String,
    /// Character index of the attribute hotkey within `caption`.
    pub hotkey: Option<usize>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub sorted_by: String,
    pub colored_by: String,
    /// Filter description, `-` when unfiltered.
    pub filtered_by: String,
    /// Transient message, e.g. an invalid pattern.
    pub message: Option<String>,
}

impl StatusLine {
    /// Renders the fixed part of the status bar.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Sorted by: {} Colored by: {} Filtered by: {}",
            self.sorted_by, self.colored_by, self.filtered_by
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputLine {
    pub prompt: String,
    pub text: String,
    /// Cursor position in characters within `text`.
    pub cursor: usize,
}
