//! Drawing surface abstraction.
//!
//! Components draw through the [`Screen`] trait instead of writing escape
//! sequences directly, so rendering can be exercised without a terminal.
//! [`CrosstermScreen`] is the terminal implementation: it queues commands
//! and sends them in one flush per frame.

use crate::domain::error::Result;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{
    Attribute as TextAttribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use std::io::Write;

/// Text attributes for one write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Style {
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            bold: false,
        }
    }

    #[must_use]
    pub const fn with_bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

/// Opaque drawing sink.
pub trait Screen {
    /// Current size as `(cols, rows)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    fn size(&self) -> Result<(u16, u16)>;

    /// Blanks the whole screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn clear(&mut self) -> Result<()>;

    /// Writes `text` at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn write_at(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<()>;

    /// Shows the text cursor at the given cell, or hides it for `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be written.
    fn set_cursor(&mut self, position: Option<(u16, u16)>) -> Result<()>;

    /// Makes everything written since the last refresh visible.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be flushed.
    fn refresh(&mut self) -> Result<()>;
}

/// [`Screen`] backed by a crossterm-driven terminal.
pub struct CrosstermScreen<W: Write> {
    out: W,
}

impl<W: Write> CrosstermScreen<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Screen for CrosstermScreen<W> {
    fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn clear(&mut self) -> Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All))?;
        Ok(())
    }

    fn write_at(&mut self, x: u16, y: u16, text: &str, style: Style) -> Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        if let Some(fg) = style.fg {
            queue!(self.out, SetForegroundColor(fg))?;
        }
        if let Some(bg) = style.bg {
            queue!(self.out, SetBackgroundColor(bg))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(TextAttribute::Bold))?;
        }
        queue!(
            self.out,
            Print(text),
            ResetColor,
            SetAttribute(TextAttribute::Reset)
        )?;
        Ok(())
    }

    fn set_cursor(&mut self, position: Option<(u16, u16)>) -> Result<()> {
        match position {
            Some((x, y)) => queue!(self.out, MoveTo(x, y), Show)?,
            None => queue!(self.out, Hide)?,
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
