//! Status bar renderer.

use super::fit;
use crate::domain::error::Result;
use crate::ui::screen::{Screen, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

/// Renders `Sorted by: .. Colored by: .. Filtered by: ..` on `row`, followed
/// by the transient message if one is set.
///
/// # Errors
///
/// Returns an error if the screen cannot be written.
pub fn render_status(
    screen: &mut dyn Screen,
    row: u16,
    cols: u16,
    status: &StatusLine,
    theme: &Theme,
) -> Result<()> {
    let width = usize::from(cols);
    let summary = status.summary();
    let summary_len = summary.chars().count().min(width);

    screen.write_at(
        0,
        row,
        &fit(&summary, summary_len),
        Style::fg(Theme::rgb(&theme.colors.status_fg)),
    )?;

    let rest = width - summary_len;
    let message = status
        .message
        .as_deref()
        .map(|m| format!("  {m}"))
        .unwrap_or_default();
    let col = u16::try_from(summary_len).unwrap_or(cols);
    screen.write_at(
        col,
        row,
        &fit(&message, rest),
        Style::fg(Theme::rgb(&theme.colors.message_fg)).bold(),
    )
}
