//! User interface rendering layer with component-based architecture.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → components → Screen
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: [`Display`], the per-frame coordinator and resize handler
//! - [`components`]: Composable UI component renderers
//! - [`layout`]: Pane geometry and the minimum terminal size
//! - [`screen`]: Drawing surface trait and its crossterm implementation
//! - [`theme`]: Color scheme definitions and color-code assignment

pub mod components;
pub mod layout;
pub mod renderer;
pub mod screen;
pub mod theme;
pub mod viewmodel;

pub use layout::{Layout, Rect};
pub use renderer::Display;
pub use screen::{CrosstermScreen, Screen, Style};
pub use theme::Theme;
pub use viewmodel::{InfoLine, InputLine, ListRow, StatusLine, UIViewModel};
