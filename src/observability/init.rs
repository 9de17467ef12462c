//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFile;
use crate::infrastructure::paths;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the configuration sets one.
pub const DEFAULT_LEVEL: &str = "info";

/// Resolves the filter directive: `RUST_LOG`, then `trace_level`, then
/// [`DEFAULT_LEVEL`].
#[must_use]
pub fn resolve_directive(env: Option<&str>, config: &Config) -> String {
    env.filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .or_else(|| config.trace_level.clone())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Initializes the tracing subscriber writing to the rotating log file.
///
/// Sets up a pipeline that:
/// 1. Filters events by the resolved level
/// 2. Formats them as plain text lines without ANSI colors
/// 3. Writes them to `pkgview.log` in the data directory, rotating at 10 MiB
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently gives up if that fails (logging is optional)
/// - Idempotent: only the first call takes effect
///
/// # Example
///
/// ```rust
/// use pkgview::observability::init_tracing;
/// use pkgview::Config;
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = resolve_directive(env.as_deref(), config);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let log = RotatingFile::new(paths::log_file());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(move || log.clone()),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_wins_over_config() {
        let config = Config {
            trace_level: Some("warn".to_string()),
            ..Config::default()
        };
        assert_eq!(resolve_directive(Some("pkgview=debug"), &config), "pkgview=debug");
        assert_eq!(resolve_directive(None, &config), "warn");
        assert_eq!(resolve_directive(Some(" "), &config), "warn");
        assert_eq!(resolve_directive(None, &Config::default()), DEFAULT_LEVEL);
    }
}
