//! Platform directory resolution.
//!
//! Configuration lives in the platform config directory and the catalog and
//! log file in the data directory, both resolved with [`ProjectDirs`]. When
//! no home directory can be determined (e.g. a stripped-down service
//! environment) the current directory is used instead.

use directories::ProjectDirs;
use std::path::PathBuf;

/// File name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "pkgview.toml";

/// File name of the default catalog inside the data directory.
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// File name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "pkgview.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("org", "pkgview", "pkgview")
}

/// Returns the configuration directory, e.g. `~/.config/pkgview` on Linux.
#[must_use]
pub fn get_config_dir() -> PathBuf {
    project_dirs().map_or_else(|| PathBuf::from("."), |dirs| dirs.config_dir().to_path_buf())
}

/// Returns the data directory, e.g. `~/.local/share/pkgview` on Linux.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    project_dirs().map_or_else(|| PathBuf::from("."), |dirs| dirs.data_dir().to_path_buf())
}

/// Default configuration file location.
#[must_use]
pub fn default_config_file() -> PathBuf {
    get_config_dir().join(CONFIG_FILE_NAME)
}

/// Default catalog location, used when neither the command line nor the
/// configuration names one.
#[must_use]
pub fn default_catalog_file() -> PathBuf {
    get_data_dir().join(CATALOG_FILE_NAME)
}

/// Log file location.
#[must_use]
pub fn log_file() -> PathBuf {
    get_data_dir().join(LOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_their_directories() {
        assert_eq!(default_config_file().parent(), Some(get_config_dir().as_path()));
        assert!(default_catalog_file().ends_with(CATALOG_FILE_NAME));
        assert!(log_file().starts_with(get_data_dir()));
    }
}
