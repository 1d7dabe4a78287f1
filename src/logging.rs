//! Tracing setup for the desk binary.
//!
//! Events go to stderr, and optionally to a log file, so that stdout carries
//! nothing but console listings. `RUST_LOG` overrides the configured level.

use std::fs::{self, File};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Level for a config value such as "debug" or "Warning". Unknown values log at info.
fn parse_level(level: &str) -> Level {
    let level = level.trim();
    if level.eq_ignore_ascii_case("warning") {
        return Level::WARN;
    }
    Level::from_str(level).unwrap_or(Level::INFO)
}

/// Filter directive scoping `level` to this crate's events.
fn crate_directive(level: &str) -> String {
    format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        parse_level(level).to_string().to_lowercase()
    )
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(crate_directive(level)))
}

/// Open `path` for writing, creating missing parent directories.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

/// Log to stderr and to `config.file`.
///
/// Fails if the log file cannot be created; callers fall back to
/// [`init_console_only`].
pub fn init(config: &LoggingConfig) -> Result<()> {
    let log_file = Arc::new(open_log_file(Path::new(&config.file))?);

    tracing_subscriber::registry()
        .with(build_filter(&config.level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr.and(log_file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(())
}

/// Log to stderr only.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();
}
