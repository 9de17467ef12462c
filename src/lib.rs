//! pkgview: a keyboard-driven terminal browser for a package catalog.
//!
//! pkgview shows every package of a catalog in a scrollable list and lets
//! the user:
//! - Narrow the list with stacked substring or regex filters on any attribute
//! - Search forward with wraparound, sort and color-code by any attribute
//! - Collect packages in a queue and run a shell command over it
//! - Replay stored command sequences (macros) with a single key
//! - Recall earlier input per operation from its history

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Runtime (runtime/)                                 │  ← Event loop
//! │  - Terminal session, key decoding, resize flag      │
//! │  - Shell execution                                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Modal key handling                               │
//! │  - Filter / sort / search / color / exec / macros   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                   │
//! ┌───────────────┐                   ┌───────────────┐
//! │ UI Layer      │                   │ Catalog Layer │
//! │ (ui/)         │                   │ (catalog/)    │
//! │ - Layout      │                   │ - JSON source │
//! │ - Theming     │                   │ - Records     │
//! │ - Components  │                   │               │
//! └───────────────┘                   └───────────────┘
//!         │                                   │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Package and attribute model (domain/)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Controller state machine with event/action model
//! - [`catalog`]: Catalog sources
//! - [`domain`]: Core domain types (Package, Attribute, errors)
//! - [`infrastructure`]: Platform directories
//! - [`observability`]: Logging to a rotating file
//! - [`runtime`]: Terminal event loop
//! - [`ui`]: Terminal rendering with theme support
//!
//! # Configuration
//!
//! `~/.config/pkgview/pkgview.toml` (platform config directory):
//!
//! ```toml
//! catalog = "/var/cache/pkgview/catalog.json"
//! shell = "bash"
//! theme = "default"
//! trace_level = "info"
//!
//! [macros]
//! startup = "@startup-sort"
//! startup-sort = ".r"
//! 1 = "/I:^installed$"
//! 2 = "!sudo pacman -S %p"
//! ```
//!
//! # Example
//!
//! ```rust
//! use pkgview::{handle_event, initialize, Config, Event, Key};
//! use pkgview::domain::Package;
//!
//! let config = Config::from_toml("[macros]\n1 = \"/n:sh\"\n")?;
//! let (mut state, _theme) = initialize(&config);
//! handle_event(
//!     &mut state,
//!     &Event::CatalogLoaded {
//!         packages: vec![Package::new("bash"), Package::new("vim")],
//!         macros: config.macros.clone(),
//!     },
//! );
//! handle_event(&mut state, &Event::Key(Key::Char('1')));
//! assert_eq!(state.view().count(), 1);
//! # Ok::<(), pkgview::PkgviewError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod runtime;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Key, MacroTable, Mode, Operation};
pub use domain::{Attribute, Package, PkgviewError, Result};
pub use ui::Theme;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Shell used for exec commands when none is configured.
pub const DEFAULT_SHELL: &str = "bash";

/// User configuration, read from a TOML file.
///
/// Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON catalog.
    ///
    /// Default: `catalog.json` in the platform data directory.
    pub catalog: Option<PathBuf>,

    /// Shell running exec commands as `<shell> -ic <command>`. Default: `"bash"`
    pub shell: String,

    /// Built-in theme name.
    ///
    /// Options: `default`, `light`. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for format.
    pub theme_file: Option<PathBuf>,

    /// Log filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any
    /// `tracing-subscriber` directive. `RUST_LOG` takes precedence.
    pub trace_level: Option<String>,

    /// Macro name to command table.
    ///
    /// A command is an operation key (`/ . ? ; ! @`) followed by its
    /// argument. Macros `0` to `9` are bound to the digit keys and
    /// `startup` runs after every catalog load.
    pub macros: MacroTable,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            shell: DEFAULT_SHELL.to_string(),
            theme: None,
            theme_file: None,
            trace_level: None,
            macros: MacroTable::new(),
        }
    }
}

impl Config {
    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::Config`] for invalid TOML or mistyped fields.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pkgview::Config;
    ///
    /// let config = Config::from_toml("shell = \"zsh\"\n[macros]\n1 = \".v\"\n")?;
    /// assert_eq!(config.shell, "zsh");
    /// assert_eq!(config.macros["1"], ".v");
    /// # Ok::<(), pkgview::PkgviewError>(())
    /// ```
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| PkgviewError::Config(format!("invalid configuration: {e}")))
    }

    /// Reads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::Config`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PkgviewError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml(&contents)
    }

    /// Loads the configuration.
    ///
    /// An explicitly given file must exist and parse. Without one the
    /// default location is tried, and a missing default file yields
    /// [`Config::default`].
    ///
    /// # Errors
    ///
    /// Returns [`PkgviewError::Config`] if a file that should be read cannot
    /// be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            tracing::debug!(path = %path.display(), "loading configuration");
            return Self::from_file(path);
        }

        let path = infrastructure::default_config_file();
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading default configuration");
            Self::from_file(&path)
        } else {
            tracing::debug!("no configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Catalog location, falling back to the platform default.
    #[must_use]
    pub fn catalog_path(&self) -> PathBuf {
        self.catalog
            .clone()
            .unwrap_or_else(infrastructure::default_catalog_file)
    }
}

/// Initializes the controller with configuration.
///
/// Creates an empty `AppState` (the catalog arrives as
/// [`Event::CatalogLoaded`]) and resolves the theme. A theme that fails to
/// load is logged and replaced by the default theme.
///
/// # Example
///
/// ```rust
/// use pkgview::{initialize, Config};
///
/// let (state, theme) = initialize(&Config::default());
/// assert_eq!(state.view().count(), 0);
/// assert_eq!(theme.name, "default");
/// ```
#[must_use]
pub fn initialize(config: &Config) -> (AppState, Theme) {
    tracing::debug!("initializing pkgview");

    let theme = Theme::resolve(config.theme.as_deref(), config.theme_file.as_deref())
        .unwrap_or_else(|e| {
            tracing::debug!(error = %e, "failed to load theme, using default");
            Theme::default()
        });

    (AppState::new(), theme)
}
