//! Tracing setup.
//!
//! The TUI owns stdout, so interactive runs log to a file (or nowhere).
//! `--check` runs log to stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Configured file if any, otherwise discarded.
    File,
    Stderr,
}

/// Installs the global subscriber. Returns `Ok(false)` when one was already
/// installed, in which case the existing subscriber stays in place.
pub fn init_tracing(config: &LoggingConfig, target: LogTarget) -> io::Result<bool> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = match (target, &config.file) {
        (LogTarget::Stderr, _) => install(filter, io::stderr, true),
        (LogTarget::File, Some(path)) => install(filter, Mutex::new(open_log(path)?), false),
        (LogTarget::File, None) => install(filter, io::sink, false),
    };
    Ok(installed)
}

fn open_log(path: &Path) -> io::Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn install<W>(filter: EnvFilter, writer: W, ansi: bool) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(ansi)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(writer)
        .try_init();

    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(error = %err, "Tracing subscriber already installed, keeping it");
            false
        }
    }
}
