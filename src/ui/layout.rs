//! Pane geometry.
//!
//! ```text
//! ┌──────────────┬──────────────┐
//! │ Packages     │ Queue        │
//! │              ├──────────────┤
//! │              │ Info         │
//! │ [footer]     │              │
//! ├──────────────┴──────────────┤
//! │ status                      │
//! │ input                       │
//! └─────────────────────────────┘
//! ```
//!
//! Every pane spends its first row on a title. The list pane also keeps its
//! last row for the footer.

use crate::domain::error::{PkgviewError, Result};

/// Smallest usable terminal width.
pub const MIN_COLS: u16 = 60;

/// Smallest usable terminal height.
pub const MIN_ROWS: u16 = 20;

/// Rectangle in terminal cells, origin top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Positions of all panes for one terminal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub cols: u16,
    pub rows: u16,
    pub list: Rect,
    pub queue: Rect,
    pub info: Rect,
    pub status_row: u16,
    pub input_row: u16,
}

/// Fails with [`PkgviewError::TerminalTooSmall`] below 60x20.
///
/// # Errors
///
/// Returns an error if either dimension is below its minimum.
pub fn ensure_min_size(cols: u16, rows: u16) -> Result<()> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(PkgviewError::TerminalTooSmall {
            cols,
            rows,
            min_cols: MIN_COLS,
            min_rows: MIN_ROWS,
        });
    }
    Ok(())
}

impl Layout {
    /// Computes pane positions for a `cols` x `rows` terminal.
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::TerminalTooSmall`] if the terminal is below
    /// the minimum size.
    pub fn compute(cols: u16, rows: u16) -> Result<Self> {
        ensure_min_size(cols, rows)?;

        let body = rows - 2;
        let left = cols / 2;
        let right = cols - left;
        let queue_height = body / 3;

        Ok(Self {
            cols,
            rows,
            list: Rect {
                x: 0,
                y: 0,
                width: left,
                height: body,
            },
            queue: Rect {
                x: left,
                y: 0,
                width: right,
                height: queue_height,
            },
            info: Rect {
                x: left,
                y: queue_height,
                width: right,
                height: body - queue_height,
            },
            status_row: rows - 2,
            input_row: rows - 1,
        })
    }

    /// Rows available for package names in the list pane.
    #[must_use]
    pub const fn list_height(&self) -> usize {
        self.list.height.saturating_sub(2) as usize
    }

    /// Rows available for package names in the queue pane.
    #[must_use]
    pub const fn queue_height(&self) -> usize {
        self.queue.height.saturating_sub(1) as usize
    }
}
