//! Help screen renderer.

use super::fit;
use crate::domain::error::Result;
use crate::ui::screen::{Screen, Style};
use crate::ui::theme::Theme;

/// Keybinding reference shown in help mode.
pub const HELP_LINES: &[&str] = &[
    "pkgview key bindings",
    "",
    "  k, Up / j, Down    move cursor",
    "  PgUp / PgDn        move one page",
    "  Home / End         first / last entry",
    "  Tab                switch between package list and queue",
    "  Right              add package to queue",
    "  Left               remove package from queue",
    "  C                  clear queue",
    "  /                  filter     [fields[!]:]pattern",
    "  n / d              filter by name / description",
    "  c                  clear filters",
    "  ?                  search     [fields:]phrase",
    "  .                  sort by attribute",
    "  ;                  color by attribute",
    "  !                  run command, %p expands to the queue",
    "  @                  run macros, comma separated",
    "  0-9                run macro 0-9",
    "  r                  reload catalog and configuration",
    "  h                  this help",
    "  q                  quit",
    "",
    "In input mode Up/Down browse history, Enter runs, Esc cancels.",
    "Fields are the highlighted letters in the info pane.",
    "",
    "Press any key to continue.",
];

/// Renders the help screen over the whole terminal.
///
/// # Errors
///
/// Returns an error if the screen cannot be written.
pub fn render_help(screen: &mut dyn Screen, cols: u16, rows: u16, theme: &Theme) -> Result<()> {
    let width = usize::from(cols);
    let text = Style::fg(Theme::rgb(&theme.colors.text_normal));
    let title = Style::fg(Theme::rgb(&theme.colors.title)).bold();

    for y in 0..rows {
        let line = HELP_LINES.get(usize::from(y)).copied().unwrap_or_default();
        let style = if y == 0 { title } else { text };
        screen.write_at(0, y, &fit(line, width), style)?;
    }
    Ok(())
}
