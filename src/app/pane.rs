//! Scrollable list-view state.
//!
//! A [`ListPane`] tracks the focused row and the scroll window of a list
//! whose items are owned elsewhere (the view or the queue). The owner reports
//! the item count through [`ListPane::set_len`]; every motion is clamped to
//! the list bounds, there is no wraparound.

/// Focus and scroll position of one list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListPane {
    len: usize,
    focused_index: usize,
    offset: usize,
    height: usize,
    has_focus: bool,
}

impl ListPane {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of items in the backing sequence and re-clamps the
    /// focused row.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.move_abs(self.focused_index);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the focused item, `None` when the list is empty.
    #[must_use]
    pub const fn focused_index(&self) -> Option<usize> {
        if self.len == 0 {
            None
        } else {
            Some(self.focused_index)
        }
    }

    /// Moves focus by `delta` rows.
    pub fn move_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.focused_index.saturating_sub(delta.unsigned_abs())
        } else {
            self.focused_index.saturating_add(delta.unsigned_abs())
        };
        self.move_abs(target);
    }

    /// Moves focus to `index`, clamped to the last item.
    pub fn move_abs(&mut self, index: usize) {
        self.focused_index = index.min(self.len.saturating_sub(1));
        self.scroll_to_focus();
    }

    pub fn move_to_end(&mut self) {
        self.move_abs(self.len.saturating_sub(1));
    }

    /// Number of rows the list can show at once (never zero).
    #[must_use]
    pub fn usable_height(&self) -> usize {
        self.height.max(1)
    }

    /// Updates the visible height after a layout change.
    pub fn reposition(&mut self, height: usize) {
        self.height = height;
        self.scroll_to_focus();
    }

    /// Range of item indices currently visible.
    #[must_use]
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let end = (self.offset + self.usable_height()).min(self.len);
        self.offset.min(end)..end
    }

    #[must_use]
    pub const fn has_focus(&self) -> bool {
        self.has_focus
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.has_focus = focused;
    }

    fn scroll_to_focus(&mut self) {
        let height = self.usable_height();
        if self.focused_index < self.offset {
            self.offset = self.focused_index;
        } else if self.focused_index >= self.offset + height {
            self.offset = self.focused_index + 1 - height;
        }
        let max_offset = self.len.saturating_sub(height);
        self.offset = self.offset.min(max_offset);
    }
}
