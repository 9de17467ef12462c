//! Structured logging to a rotating file.
//!
//! Stdout belongs to the terminal UI, so `tracing` output is formatted by
//! `tracing-subscriber` and written to `pkgview.log` in the data directory.
//!
//! # Configuration
//!
//! The level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the configuration file or `--trace-level`
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - `init`: Subscriber setup and level resolution
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::{RotatingFile, MAX_BACKUP_FILES, MAX_FILE_SIZE_BYTES};
pub use init::{init_tracing, resolve_directive, DEFAULT_LEVEL};
