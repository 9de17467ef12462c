//! Single-line input buffer with a cursor.
//!
//! The cursor is a character index in `0..=len`, so editing stays correct for
//! multi-byte input.

/// Editable text plus cursor position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
    pos: usize,
}

impl InputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents and moves the cursor to the end.
    pub fn set(&mut self, text: &str) {
        self.chars = text.chars().collect();
        self.pos = self.chars.len();
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.pos = 0;
    }

    /// Inserts a character at the cursor and advances past it.
    pub fn insert(&mut self, c: char) {
        self.chars.insert(self.pos, c);
        self.pos += 1;
    }

    /// Deletes the character under the cursor.
    pub fn delete(&mut self) {
        if self.pos < self.chars.len() {
            self.chars.remove(self.pos);
        }
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.pos > 0 {
            self.pos -= 1;
            self.chars.remove(self.pos);
        }
    }

    pub fn move_left(&mut self) {
        self.pos = self.pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.pos = (self.pos + 1).min(self.chars.len());
    }

    pub fn move_start(&mut self) {
        self.pos = 0;
    }

    pub fn move_end(&mut self) {
        self.pos = self.chars.len();
    }

    #[must_use]
    pub fn contents(&self) -> String {
        self.chars.iter().collect()
    }

    /// Cursor position in characters.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Takes the contents out, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        let text = self.contents();
        self.clear();
        text
    }
}
