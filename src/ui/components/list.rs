//! List pane renderer, shared by the package list and the queue.

use super::{clear_rows, fit, render_title};
use crate::domain::error::Result;
use crate::ui::layout::Rect;
use crate::ui::screen::{Screen, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListRow;

/// Everything one list pane needs to draw itself.
#[derive(Debug, Clone, Copy)]
pub struct ListPaneView<'a> {
    pub title: &'a str,
    pub rows: &'a [ListRow],
    pub focused: bool,
    /// Footer text, drawn on the last row when `reserve_footer` is set.
    pub footer: Option<&'a str>,
    pub reserve_footer: bool,
}

/// Renders a list pane into `rect`.
///
/// Rows are colored by their palette slot. The cursor row is drawn with the
/// selection colors when the pane has focus and with the inactive selection
/// background otherwise.
///
/// # Errors
///
/// Returns an error if the screen cannot be written.
pub fn render_list(
    screen: &mut dyn Screen,
    rect: Rect,
    pane: &ListPaneView<'_>,
    theme: &Theme,
) -> Result<()> {
    render_title(screen, rect, pane.title, theme)?;

    let width = usize::from(rect.width);
    let body_end = if pane.reserve_footer {
        rect.height.saturating_sub(1)
    } else {
        rect.height
    };

    let mut y = 1;
    for row in pane.rows {
        if y >= body_end {
            break;
        }
        let style = row_style(row, pane.focused, theme);
        screen.write_at(rect.x, rect.y + y, &fit(&format!(" {}", row.name), width), style)?;
        y += 1;
    }
    clear_rows(screen, Rect { height: body_end, ..rect }, y)?;

    if pane.reserve_footer && rect.height > 1 {
        let footer = pane.footer.unwrap_or_default();
        let style = Style::fg(Theme::rgb(&theme.colors.text_dim));
        screen.write_at(rect.x, rect.y + rect.height - 1, &fit(footer, width), style)?;
    }
    Ok(())
}

fn row_style(row: &ListRow, focused: bool, theme: &Theme) -> Style {
    match (row.is_selected, focused) {
        (true, true) => Style::fg(Theme::rgb(&theme.colors.selection_fg))
            .with_bg(Theme::rgb(&theme.colors.selection_bg))
            .bold(),
        (true, false) => Style::fg(theme.palette_color(row.color_slot))
            .with_bg(Theme::rgb(&theme.colors.inactive_selection_bg)),
        (false, _) => Style::fg(theme.palette_color(row.color_slot)),
    }
}
