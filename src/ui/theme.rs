//! Theme management and color-code assignment.
//!
//! This module defines the color scheme of the browser, supporting built-in
//! themes and custom themes loaded from TOML files. Colors are written as hex
//! strings and converted to 24-bit terminal colors when drawn.
//!
//! # Built-in Themes
//!
//! - `default`: Dark theme (default)
//! - `light`: Light theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! title = "#89b4fa"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! inactive_selection_bg = "#45475a"
//! hotkey_fg = "#f9e2af"
//! status_fg = "#a6adc8"
//! message_fg = "#f38ba8"
//! palette = ["#a6e3a1", "#89b4fa", "#f9e2af", "#f38ba8", "#cba6f7", "#94e2d5"]
//! ```
//!
//! # Color Coding
//!
//! Packages are colored by the text of one attribute: each distinct value
//! gets the next palette slot in order of first appearance, wrapping after
//! [`PALETTE_SIZE`] values. See [`assign_color_slots`].

use crate::domain::error::{PkgviewError, Result};
use crate::domain::{Attribute, Package};
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Number of colors used for color coding.
pub const PALETTE_SIZE: usize = 6;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "default";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footers, separators).
    pub text_dim: String,
    /// Pane title color.
    pub title: String,

    /// Focused row foreground in the focused pane.
    pub selection_fg: String,
    /// Focused row background in the focused pane.
    pub selection_bg: String,
    /// Focused row background in the pane without input focus.
    pub inactive_selection_bg: String,

    /// Hotkey letter inside info pane captions.
    pub hotkey_fg: String,
    /// Status bar text.
    pub status_fg: String,
    /// Transient status messages.
    pub message_fg: String,

    /// Color-coding palette. Missing entries fall back to `text_normal`.
    #[serde(default)]
    pub palette: Vec<String>,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default" => include_str!("../../themes/default.toml"),
            "light" => include_str!("../../themes/light.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| PkgviewError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| PkgviewError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Resolves the configured theme: a custom file wins over a built-in name.
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::Theme`] for an unreadable file or an unknown
    /// built-in name.
    pub fn resolve(name: Option<&str>, file: Option<&Path>) -> Result<Self> {
        if let Some(file) = file {
            return Self::from_file(file);
        }
        let name = name.unwrap_or(DEFAULT_THEME);
        Self::from_name(name).ok_or_else(|| PkgviewError::Theme(format!("unknown theme: {name}")))
    }

    /// Converts a hex color to a terminal color.
    ///
    /// Strips a `#` prefix if present. Returns white on parse errors.
    #[must_use]
    pub fn rgb(hex: &str) -> Color {
        let (r, g, b) = hex_to_rgb(hex);
        Color::Rgb { r, g, b }
    }

    /// Color for a color-coding slot.
    #[must_use]
    pub fn palette_color(&self, slot: usize) -> Color {
        let hex = self
            .colors
            .palette
            .get(slot % PALETTE_SIZE)
            .unwrap_or(&self.colors.text_normal);
        Self::rgb(hex)
    }

    fn fallback() -> Self {
        let text = "#ffffff".to_string();
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors {
                text_normal: text.clone(),
                text_dim: "#808080".to_string(),
                title: text.clone(),
                selection_fg: "#000000".to_string(),
                selection_bg: text.clone(),
                inactive_selection_bg: "#808080".to_string(),
                hotkey_fg: text.clone(),
                status_fg: text.clone(),
                message_fg: text,
                palette: Vec::new(),
            },
        }
    }
}

impl Default for Theme {
    /// Returns the built-in `default` theme.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).unwrap_or_else(Self::fallback)
    }
}

fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
    let hex = hex.trim().trim_start_matches('#');

    if hex.len() != 6 || !hex.is_ascii() {
        return (255, 255, 255);
    }

    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

    (r, g, b)
}

/// Assigns a palette slot to every catalog entry keyed on the text of `attr`.
///
/// Distinct values are numbered in order of first appearance in the catalog
/// and the number is wrapped to the palette size, so equal values always
/// share a color.
///
/// # Example
///
/// ```rust
/// use pkgview::domain::{Attribute, Package};
/// use pkgview::ui::theme::assign_color_slots;
///
/// let catalog = vec![
///     Package::new("bash").with(Attribute::Repository, "core"),
///     Package::new("fish").with(Attribute::Repository, "extra"),
///     Package::new("zsh").with(Attribute::Repository, "core"),
/// ];
/// assert_eq!(assign_color_slots(&catalog, Attribute::Repository), vec![0, 1, 0]);
/// ```
#[must_use]
pub fn assign_color_slots(catalog: &[Package], attr: Attribute) -> Vec<usize> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    catalog
        .iter()
        .map(|package| {
            let next = slots.len();
            *slots.entry(package.attribute(attr)).or_insert(next) % PALETTE_SIZE
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_themes_parse() {
        for name in ["default", "light"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
            assert_eq!(theme.colors.palette.len(), PALETTE_SIZE);
        }
        assert!(Theme::from_name("nope").is_none());
    }

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::rgb("#ff8000"), Color::Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(Theme::rgb("ff8000"), Color::Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(Theme::rgb("#fff"), Color::Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn resolve_prefers_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.toml");
        let mut theme = Theme::default();
        theme.name = "mine".to_string();
        fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        let resolved = Theme::resolve(Some("light"), Some(&path)).unwrap();
        assert_eq!(resolved.name, "mine");
        assert_eq!(Theme::resolve(None, None).unwrap().name, "default");
        assert!(matches!(
            Theme::resolve(Some("nope"), None),
            Err(PkgviewError::Theme(_))
        ));
    }

    #[test]
    fn invalid_theme_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "name = 1").unwrap();
        assert!(matches!(Theme::from_file(&path), Err(PkgviewError::Theme(_))));
    }

    #[test]
    fn color_slots_wrap_after_palette() {
        let catalog: Vec<Package> = (0..8)
            .map(|i| Package::new(format!("p{i}")).with(Attribute::Version, format!("{i}")))
            .collect();
        let slots = assign_color_slots(&catalog, Attribute::Version);
        assert_eq!(slots, vec![0, 1, 2, 3, 4, 5, 0, 1]);
    }

    #[test]
    fn empty_values_share_a_slot() {
        let catalog = vec![Package::new("a"), Package::new("b")];
        assert_eq!(assign_color_slots(&catalog, Attribute::Groups), vec![0, 0]);
    }
}
