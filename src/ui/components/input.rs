//! Input line renderer.

use super::fit;
use crate::domain::error::Result;
use crate::ui::screen::{Screen, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputLine;

/// Renders the prompt and edit buffer on `row`.
///
/// Text wider than the terminal scrolls horizontally so the cursor stays
/// visible.
///
/// # Returns
///
/// The cell the text cursor belongs in, `None` outside input mode.
///
/// # Errors
///
/// Returns an error if the screen cannot be written.
pub fn render_input(
    screen: &mut dyn Screen,
    row: u16,
    cols: u16,
    input: Option<&InputLine>,
    theme: &Theme,
) -> Result<Option<(u16, u16)>> {
    let width = usize::from(cols);
    let style = Style::fg(Theme::rgb(&theme.colors.text_normal));

    let Some(input) = input else {
        screen.write_at(0, row, &fit("", width), style)?;
        return Ok(None);
    };

    let line: Vec<char> = input.prompt.chars().chain(input.text.chars()).collect();
    let cursor = input.prompt.chars().count() + input.cursor;
    let offset = (cursor + 1).saturating_sub(width);

    let visible: String = line.iter().skip(offset).collect();
    screen.write_at(0, row, &fit(&visible, width), style)?;

    let x = u16::try_from(cursor - offset).unwrap_or(cols.saturating_sub(1));
    Ok(Some((x, row)))
}
