//! Controller state and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the
//! browsing session: the catalog, the filtered view, the queue, both list
//! panes, the current mode and the per-operation histories.
//!
//! # State Components
//!
//! - **Catalog**: every package, sorted by name, never mutated after load
//! - **View**: indices into the catalog, the filtered and sorted subset shown
//!   in the list pane
//! - **Queue**: indices into the catalog staged for a batch command, without
//!   duplicates
//! - **Panes**: focus and scroll state of the list and queue panes
//! - **Mode / pending operation / input buffer**: the input state machine
//!
//! # Example
//!
//! ```rust
//! use pkgview::app::AppState;
//! use pkgview::domain::Package;
//! use std::collections::BTreeMap;
//!
//! let mut state = AppState::new();
//! state.load_catalog(vec![Package::new("zsh"), Package::new("bash")], BTreeMap::new());
//! let names: Vec<&str> = state.view().map(|p| p.name()).collect();
//! assert_eq!(names, vec!["bash", "zsh"]);
//! ```

use super::actions::Action;
use super::filter::{compare_by_attribute, FilterSelection};
use super::history::Histories;
use super::input::InputBuffer;
use super::modes::{Focus, Mode, Operation};
use super::pane::ListPane;
use crate::domain::{Attribute, Package};
use crate::ui::theme::assign_color_slots;
use crate::ui::viewmodel::{InfoLine, InputLine, ListRow, StatusLine, UIViewModel};
use std::collections::BTreeMap;

/// Macro name to command string table, as read from the configuration.
pub type MacroTable = BTreeMap<String, String>;

/// Name of the macro executed after every catalog load.
pub const STARTUP_MACRO: &str = "startup";

/// Central controller state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) catalog: Vec<Package>,
    pub(crate) view: Vec<usize>,
    pub(crate) queue: Vec<usize>,
    pub(crate) list_pane: ListPane,
    pub(crate) queue_pane: ListPane,
    pub(crate) focus: Focus,

    /// Current input handling mode.
    pub mode: Mode,

    /// Operation the input buffer will be committed to.
    pub pending: Operation,

    pub(crate) input: InputBuffer,
    pub(crate) histories: Histories,
    pub(crate) selection: FilterSelection,
    pub(crate) sorted_by: Attribute,
    pub(crate) colored_by: Attribute,
    pub(crate) filter_description: String,
    pub(crate) macros: MacroTable,
    pub(crate) color_slots: Vec<usize>,
    pub(crate) status: Option<String>,
    pub(crate) list_footer: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates an empty state: no catalog, standard mode, sorted by name and
    /// colored by install state.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            catalog: Vec::new(),
            view: Vec::new(),
            queue: Vec::new(),
            list_pane: ListPane::new(),
            queue_pane: ListPane::new(),
            focus: Focus::List,
            mode: Mode::Standard,
            pending: Operation::None,
            input: InputBuffer::new(),
            histories: Histories::new(),
            selection: FilterSelection::new(),
            sorted_by: Attribute::Name,
            colored_by: Attribute::InstallState,
            filter_description: String::new(),
            macros: MacroTable::new(),
            color_slots: Vec::new(),
            status: None,
            list_footer: None,
        };
        state.set_focus(Focus::List);
        state
    }

    /// Replaces the catalog and macro table, discarding all view, queue and
    /// filter state, then runs the `startup` macro if one is configured.
    ///
    /// Histories survive. The view is re-sorted by the current sort
    /// attribute and colors are reassigned for the current color attribute.
    pub fn load_catalog(&mut self, mut packages: Vec<Package>, macros: MacroTable) -> Vec<Action> {
        let _span = tracing::debug_span!("load_catalog", packages = packages.len()).entered();

        packages.sort_by(|a, b| compare_by_attribute(a, b, Attribute::Name));
        packages.dedup_by(|a, b| a.key() == b.key());

        self.catalog = packages;
        self.macros = macros;
        self.queue.clear();
        self.queue_pane.set_len(0);
        self.selection.reset();
        self.status = None;
        self.list_footer = None;
        self.mode = Mode::Standard;
        self.pending = Operation::None;
        self.input.clear();
        self.color_slots = assign_color_slots(&self.catalog, self.colored_by);
        self.clear_filter();
        self.set_focus(Focus::List);

        tracing::debug!(catalog = self.catalog.len(), "catalog loaded");

        if self.macros.contains_key(STARTUP_MACRO) {
            self.apply_command(Operation::Macro, STARTUP_MACRO)
        } else {
            vec![]
        }
    }

    /// Resets the view to the full catalog sorted by the active sort
    /// attribute and forgets every applied filter.
    pub fn clear_filter(&mut self) {
        self.view = (0..self.catalog.len()).collect();
        self.sort_view(self.sorted_by);
        self.filter_description.clear();
        self.list_pane.set_len(self.view.len());
        self.list_pane.move_abs(0);
    }

    pub(crate) fn sort_view(&mut self, attr: Attribute) {
        let catalog = &self.catalog;
        self.view
            .sort_by(|&a, &b| compare_by_attribute(&catalog[a], &catalog[b], attr));
    }

    /// Moves keyboard focus to `focus`. Focusing an empty queue focuses the
    /// list instead.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = if focus == Focus::Queue && self.queue.is_empty() {
            Focus::List
        } else {
            focus
        };
        self.list_pane.set_focused(self.focus == Focus::List);
        self.queue_pane.set_focused(self.focus == Focus::Queue);
    }

    #[must_use]
    pub const fn focus(&self) -> Focus {
        self.focus
    }

    pub(crate) fn focused_pane_mut(&mut self) -> &mut ListPane {
        match self.focus {
            Focus::List => &mut self.list_pane,
            Focus::Queue => &mut self.queue_pane,
        }
    }

    /// Appends the focused view entry to the queue unless it is already
    /// queued, then advances the list focus by one.
    pub fn enqueue_focused(&mut self) {
        if self.focus != Focus::List {
            return;
        }
        let Some(&index) = self
            .list_pane
            .focused_index()
            .and_then(|i| self.view.get(i))
        else {
            return;
        };

        let key = self.catalog[index].key();
        if self.queue.iter().any(|&q| self.catalog[q].key() == key) {
            tracing::trace!(package = %key, "already queued");
            return;
        }

        tracing::debug!(package = %key, "queued");
        self.queue.push(index);
        self.queue_pane.set_len(self.queue.len());
        self.queue_pane.move_to_end();
        self.list_pane.move_by(1);
    }

    /// Removes the focused queue entry; focus falls back to the list once
    /// the queue is empty.
    pub fn dequeue_focused(&mut self) {
        if self.focus != Focus::Queue {
            return;
        }
        self.remove_focused_queue_entry();
        if self.queue.is_empty() {
            self.set_focus(Focus::List);
        }
    }

    /// Removes queue entries until the queue is empty and focuses the list.
    pub fn clear_queue(&mut self) {
        while !self.queue.is_empty() {
            self.remove_focused_queue_entry();
        }
        self.set_focus(Focus::List);
    }

    fn remove_focused_queue_entry(&mut self) {
        if let Some(i) = self.queue_pane.focused_index() {
            self.queue.remove(i);
            self.queue_pane.set_len(self.queue.len());
        } else {
            self.queue.clear();
            self.queue_pane.set_len(0);
        }
    }

    /// Packages of the view, in display order.
    pub fn view(&self) -> impl Iterator<Item = &Package> + '_ {
        self.view.iter().map(move |&i| &self.catalog[i])
    }

    /// Packages of the queue, in queue order.
    pub fn queue(&self) -> impl Iterator<Item = &Package> + '_ {
        self.queue.iter().map(move |&i| &self.catalog[i])
    }

    #[must_use]
    pub fn catalog(&self) -> &[Package] {
        &self.catalog
    }

    /// Package under the cursor of the focused pane.
    #[must_use]
    pub fn focused_package(&self) -> Option<&Package> {
        let (pane, items) = match self.focus {
            Focus::List => (&self.list_pane, &self.view),
            Focus::Queue => (&self.queue_pane, &self.queue),
        };
        pane.focused_index()
            .and_then(|i| items.get(i))
            .map(|&i| &self.catalog[i])
    }

    /// Focused row of the list pane.
    #[must_use]
    pub const fn list_focus(&self) -> Option<usize> {
        self.list_pane.focused_index()
    }

    /// Focused row of the queue pane.
    #[must_use]
    pub const fn queue_focus(&self) -> Option<usize> {
        self.queue_pane.focused_index()
    }

    /// Comma-joined description of every filter applied since the last clear.
    #[must_use]
    pub fn filter_description(&self) -> &str {
        &self.filter_description
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub const fn sorted_by(&self) -> Attribute {
        self.sorted_by
    }

    #[must_use]
    pub const fn colored_by(&self) -> Attribute {
        self.colored_by
    }

    #[must_use]
    pub fn histories(&self) -> &Histories {
        &self.histories
    }

    /// Current contents of the input buffer.
    #[must_use]
    pub fn input(&self) -> String {
        self.input.contents()
    }

    /// Transient message shown in the status bar.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(text.into());
    }

    /// Shows `text` in the list pane footer until the next command finishes.
    pub fn set_list_footer(&mut self, text: impl Into<String>) {
        self.list_footer = Some(text.into());
    }

    /// Updates pane heights after a layout change. Does not touch the
    /// catalog, view or queue.
    pub fn reposition(&mut self, list_height: usize, queue_height: usize) {
        self.list_pane.reposition(list_height);
        self.queue_pane.reposition(queue_height);
    }

    /// Usable height of the list pane, used for page motion.
    #[must_use]
    pub fn page_height(&self) -> usize {
        self.list_pane.usable_height()
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let list_rows = self.rows_for(&self.list_pane, &self.view);
        let queue_rows = self.rows_for(&self.queue_pane, &self.queue);

        let info = self
            .focused_package()
            .map(|package| {
                package
                    .populated()
                    .map(|(attr, text)| InfoLine {
                        caption: attr.name().to_string(),
                        hotkey: attr.hotkey_position(),
                        text: text.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let status = StatusLine {
            sorted_by: self.sorted_by.name().to_string(),
            colored_by: self.colored_by.name().to_string(),
            filtered_by: if self.filter_description.is_empty() {
                "-".to_string()
            } else {
                self.filter_description.clone()
            },
            message: self.status.clone(),
        };

        let input = (self.mode == Mode::Input).then(|| InputLine {
            prompt: self.pending.prompt(),
            text: self.input.contents(),
            cursor: self.input.pos(),
        });

        UIViewModel {
            mode: self.mode,
            list_title: format!("Packages ({}/{})", self.view.len(), self.catalog.len()),
            list_rows,
            list_focused: self.list_pane.has_focus(),
            list_footer: self.list_footer.clone(),
            queue_title: format!("Queue ({})", self.queue.len()),
            queue_rows,
            queue_focused: self.queue_pane.has_focus(),
            info,
            status,
            input,
        }
    }

    fn rows_for(&self, pane: &ListPane, items: &[usize]) -> Vec<ListRow> {
        let focused = pane.focused_index();
        pane.visible_range()
            .filter_map(|row| items.get(row).map(|&i| (row, i)))
            .map(|(row, i)| ListRow {
                name: self.catalog[i].name().to_string(),
                color_slot: self.color_slots.get(i).copied().unwrap_or(0),
                is_selected: focused == Some(row),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(names: &[&str]) -> AppState {
        let mut state = AppState::new();
        state.reposition(10, 5);
        let packages = names.iter().map(|n| Package::new(*n)).collect();
        state.load_catalog(packages, MacroTable::new());
        state
    }

    fn queued(state: &AppState) -> Vec<String> {
        state.queue().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn load_sorts_and_deduplicates_by_name() {
        let state = state_with(&["zsh", "bash", "zsh", "fish"]);
        let names: Vec<&str> = state.view().map(Package::name).collect();
        assert_eq!(names, vec!["bash", "fish", "zsh"]);
        assert_eq!(state.list_focus(), Some(0));
    }

    #[test]
    fn enqueue_advances_and_ignores_duplicates() {
        let mut state = state_with(&["bash", "fish", "zsh"]);
        state.enqueue_focused();
        assert_eq!(queued(&state), vec!["bash"]);
        assert_eq!(state.list_focus(), Some(1));

        state.list_pane.move_abs(0);
        state.enqueue_focused();
        assert_eq!(queued(&state), vec!["bash"]);
    }

    #[test]
    fn enqueue_requires_list_focus_and_entries() {
        let mut state = state_with(&[]);
        state.enqueue_focused();
        assert!(state.queue.is_empty());
    }

    #[test]
    fn focusing_empty_queue_keeps_list_focus() {
        let mut state = state_with(&["bash"]);
        state.set_focus(Focus::Queue);
        assert_eq!(state.focus(), Focus::List);
        state.enqueue_focused();
        state.set_focus(Focus::Queue);
        assert_eq!(state.focus(), Focus::Queue);
    }

    #[test]
    fn dequeue_last_entry_returns_focus_to_list() {
        let mut state = state_with(&["bash", "zsh"]);
        state.enqueue_focused();
        state.set_focus(Focus::Queue);
        state.dequeue_focused();
        assert!(state.queue.is_empty());
        assert_eq!(state.focus(), Focus::List);
    }

    #[test]
    fn viewmodel_marks_focused_pane() {
        let mut state = state_with(&["a", "b", "c"]);
        state.enqueue_focused();
        state.enqueue_focused();
        let vm = state.compute_viewmodel();
        assert!(vm.list_focused && !vm.queue_focused);

        state.set_focus(Focus::Queue);
        assert_eq!(state.queue_focus(), Some(1));
        let vm = state.compute_viewmodel();
        assert!(vm.queue_focused && !vm.list_focused);
        assert!(vm.queue_rows[1].is_selected);

        state.dequeue_focused();
        assert_eq!(state.queue_focus(), Some(0));
        state.dequeue_focused();
        assert_eq!(state.queue_focus(), None);
        assert!(state.compute_viewmodel().list_focused);
    }

    #[test]
    fn clear_queue_empties_and_focuses_list() {
        let mut state = state_with(&["a", "b", "c"]);
        state.enqueue_focused();
        state.enqueue_focused();
        state.enqueue_focused();
        state.set_focus(Focus::Queue);
        state.clear_queue();
        assert!(state.queue.is_empty());
        assert_eq!(state.focus(), Focus::List);
    }

    #[test]
    fn focused_package_follows_focus() {
        let mut state = state_with(&["a", "b", "c"]);
        state.list_pane.move_abs(2);
        state.enqueue_focused();
        state.list_pane.move_abs(0);
        assert_eq!(state.focused_package().map(Package::name), Some("a"));
        state.set_focus(Focus::Queue);
        assert_eq!(state.focused_package().map(Package::name), Some("c"));
    }

    #[test]
    fn viewmodel_reports_status_defaults() {
        let state = state_with(&["bash"]);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.status.sorted_by, "Name");
        assert_eq!(vm.status.colored_by, "Install state");
        assert_eq!(vm.status.filtered_by, "-");
        assert!(vm.input.is_none());
        assert_eq!(vm.list_rows.len(), 1);
        assert!(vm.list_rows[0].is_selected);
    }
}
