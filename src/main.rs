//! Command line entry point.
//!
//! Parses arguments, loads configuration and catalog, starts logging and
//! hands over to the runtime. Loading happens before the terminal is taken
//! over, so a broken catalog is reported on a normal screen.
//!
//! # Exit Status
//!
//! - `0`: the user quit
//! - `1`: a fatal error (unreadable configuration or catalog, terminal too
//!   small, terminal I/O failure)

use clap::Parser;
use pkgview::observability::init_tracing;
use pkgview::runtime::{self, Options};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "pkgview")]
#[command(version, about = "Keyboard-driven terminal browser for a package catalog", long_about = None)]
struct Cli {
    /// Configuration file (default: pkgview.toml in the config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Catalog file, overriding the configured one
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` or `pkgview=trace`
    #[arg(long, value_name = "LEVEL")]
    trace_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = Options {
        config_path: cli.config,
        catalog: cli.catalog,
    };

    let (mut config, loaded) = match runtime::load_session(&options) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("pkgview: {e}");
            return ExitCode::FAILURE;
        }
    };
    if cli.trace_level.is_some() {
        config.trace_level = cli.trace_level;
    }
    init_tracing(&config);

    match runtime::run(&options, &config, loaded) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("pkgview: {e}");
            ExitCode::FAILURE
        }
    }
}
