//! Info pane renderer.
//!
//! Shows every non-empty attribute of the focused package as
//! `Caption: text`, with the attribute's hotkey highlighted inside the
//! caption so the keys for field selection can be read off the screen.

use super::{clear_rows, fit, render_title};
use crate::domain::error::Result;
use crate::ui::layout::Rect;
use crate::ui::screen::{Screen, Style};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InfoLine;

/// Renders the info pane into `rect`.
///
/// # Errors
///
/// Returns an error if the screen cannot be written.
pub fn render_info(
    screen: &mut dyn Screen,
    rect: Rect,
    lines: &[InfoLine],
    theme: &Theme,
) -> Result<()> {
    render_title(screen, rect, "Info", theme)?;

    let mut y = 1;
    for line in lines {
        if y >= rect.height {
            break;
        }
        render_line(screen, rect, y, line, theme)?;
        y += 1;
    }
    clear_rows(screen, rect, y)
}

fn render_line(
    screen: &mut dyn Screen,
    rect: Rect,
    y: u16,
    line: &InfoLine,
    theme: &Theme,
) -> Result<()> {
    let normal = Style::fg(Theme::rgb(&theme.colors.text_normal));
    let hotkey = Style::fg(Theme::rgb(&theme.colors.hotkey_fg)).bold();
    let width = usize::from(rect.width);

    let mut segments: Vec<(String, Style)> = Vec::new();
    let caption: Vec<char> = line.caption.chars().collect();
    match line.hotkey.filter(|&i| i < caption.len()) {
        Some(i) => {
            segments.push((caption[..i].iter().collect(), normal));
            segments.push((caption[i].to_string(), hotkey));
            segments.push((caption[i + 1..].iter().collect(), normal));
        }
        None => segments.push((line.caption.clone(), normal)),
    }
    segments.push((format!(": {}", line.text), normal));

    let mut x = 0usize;
    for (text, style) in segments {
        let remaining = width.saturating_sub(x);
        if remaining == 0 {
            break;
        }
        let piece: String = text.chars().take(remaining).collect();
        let len = piece.chars().count();
        if len > 0 {
            let col = rect.x + u16::try_from(x).unwrap_or(u16::MAX);
            screen.write_at(col, rect.y + y, &piece, style)?;
        }
        x += len;
    }
    if x < width {
        let col = rect.x + u16::try_from(x).unwrap_or(u16::MAX);
        screen.write_at(col, rect.y + y, &fit("", width - x), Style::default())?;
    }
    Ok(())
}
