//! File-backed tracing setup. The terminal belongs to the UI, so logs never go
//! to stdout or stderr.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "CONFTTY_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global subscriber writing to `log_path`.
///
/// # Errors
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(log_path: &Path) -> io::Result<()> {
    let log_file = open_log_file(log_path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)
}

/// Opens `log_path` for appending, creating parent directories.
fn open_log_file(log_path: &Path) -> io::Result<File> {
    if let Some(parent) = log_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new().create(true).append(true).open(log_path)
}
