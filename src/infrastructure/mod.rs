//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module resolves where configuration, catalog and log files live on
//! the current platform.

pub mod paths;

pub use paths::{
    default_catalog_file, default_config_file, get_config_dir, get_data_dir, log_file,
};
