//! Per-operation command history.
//!
//! Every committed line is appended to the history of its operation, even if
//! the command turned out to be a no-op: history records intent, not effect.
//! While editing, up/down walk a cursor through the entries.

use super::modes::Operation;

/// Append-only log of submitted command lines with a browse cursor.
///
/// The cursor ranges over `0..=len`; `len` is "past the end", where browsing
/// yields an empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a line. Does not move the cursor.
    pub fn add(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    /// Positions the cursor one past the newest entry.
    pub fn reset(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Steps toward older entries, stopping at the oldest one.
    pub fn move_back(&mut self) -> String {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    /// Steps toward newer entries, stopping past the newest one.
    pub fn move_forward(&mut self) -> String {
        if self.cursor < self.entries.len() {
            self.cursor += 1;
        }
        self.current()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    fn current(&self) -> String {
        self.entries.get(self.cursor).cloned().unwrap_or_default()
    }
}

/// The six independent histories, one per [`Operation`].
#[derive(Debug, Clone, Default)]
pub struct Histories {
    slots: [History; 6],
}

impl Histories {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// History of `op`, `None` for [`Operation::None`].
    #[must_use]
    pub fn get(&self, op: Operation) -> Option<&History> {
        op.slot().map(|i| &self.slots[i])
    }

    /// Mutable history of `op`, `None` for [`Operation::None`].
    pub fn get_mut(&mut self, op: Operation) -> Option<&mut History> {
        op.slot().map(|i| &mut self.slots[i])
    }

    /// Records a committed line for `op`.
    pub fn add(&mut self, op: Operation, text: &str) {
        if let Some(history) = self.get_mut(op) {
            history.add(text);
        }
    }
}
