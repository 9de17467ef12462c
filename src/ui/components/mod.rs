//! Composable UI component renderers.
//!
//! Each component draws one region of the screen through a [`Screen`] and
//! owns every cell of its region, padding with blanks so stale text from the
//! previous frame never survives.
//!
//! # Components
//!
//! - [`list`]: Package list and queue panes
//! - [`info`]: Attributes of the focused package
//! - [`status`]: Sort, color and filter summary
//! - [`input`]: Prompt and edit line
//! - [`help`]: Full-screen keybinding reference

mod help;
mod info;
mod input;
mod list;
mod status;

pub use help::{render_help, HELP_LINES};
pub use info::render_info;
pub use input::render_input;
pub use list::{render_list, ListPaneView};
pub use status::render_status;

use crate::domain::error::Result;
use crate::ui::layout::Rect;
use crate::ui::screen::{Screen, Style};
use crate::ui::theme::Theme;

/// Truncates or pads `text` to exactly `width` characters.
///
/// # Example
///
/// ```rust
/// use pkgview::ui::components::fit;
///
/// assert_eq!(fit("bash", 6), "bash  ");
/// assert_eq!(fit("bash", 2), "ba");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

/// Draws a bold title across the first row of `rect`.
fn render_title(screen: &mut dyn Screen, rect: Rect, title: &str, theme: &Theme) -> Result<()> {
    let style = Style::fg(Theme::rgb(&theme.colors.title)).bold();
    screen.write_at(rect.x, rect.y, &fit(title, usize::from(rect.width)), style)
}

/// Blanks rows `from..rect.height` of `rect`.
fn clear_rows(screen: &mut dyn Screen, rect: Rect, from: u16) -> Result<()> {
    let blank = fit("", usize::from(rect.width));
    for row in from..rect.height {
        screen.write_at(rect.x, rect.y + row, &blank, Style::default())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("größe", 3), "grö");
        assert_eq!(fit("", 2), "  ");
    }
}
