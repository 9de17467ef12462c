//! Error types for pkgview.
//!
//! This module defines the centralized error type [`PkgviewError`] and a type
//! alias [`Result`] used throughout the crate. Only fatal conditions and I/O
//! failures travel through this type; malformed user input inside the
//! controller (bad patterns, unknown macros) is handled in place.

use thiserror::Error;

/// The main error type for pkgview operations.
///
/// # Examples
///
/// ```
/// use pkgview::PkgviewError;
///
/// fn validate_config() -> Result<(), PkgviewError> {
///     Err(PkgviewError::Config("missing catalog path".to_string()))
/// }
///
/// assert!(validate_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PkgviewError {
    /// The catalog could not be loaded.
    ///
    /// Fatal at startup and on reload: no partial UI is shown.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or terminal I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The terminal is smaller than the minimum usable size.
    ///
    /// Raised at startup and on every resize. Deliberately unrecoverable.
    #[error("Window size {cols}x{rows} is below required minimum {min_cols}x{min_rows}")]
    TerminalTooSmall {
        /// Current width in columns.
        cols: u16,
        /// Current height in rows.
        rows: u16,
        /// Required width.
        min_cols: u16,
        /// Required height.
        min_rows: u16,
    },

    /// An external command could not be started.
    #[error("Command error: {0}")]
    Command(String),
}

/// A specialized `Result` type for pkgview operations.
pub type Result<T> = std::result::Result<T, PkgviewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_too_small_message_names_both_sizes() {
        let err = PkgviewError::TerminalTooSmall {
            cols: 40,
            rows: 10,
            min_cols: 60,
            min_rows: 20,
        };
        assert_eq!(
            err.to_string(),
            "Window size 40x10 is below required minimum 60x20"
        );
    }

    #[test]
    fn io_errors_convert() {
        fn open() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(open(), Err(PkgviewError::Io(_))));
    }
}
