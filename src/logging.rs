//! File logging.
//!
//! The TUI owns the terminal, so log lines go to a daily rolling file
//! `<data_dir>/hbtui/hbtui.log.<date>` instead of stderr. Writes happen on a
//! background thread; keep the returned [`LogGuard`] alive until exit so the
//! last lines are flushed.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV: &str = "HBTUI_LOG";

/// Prefix of the rolling log files.
pub const LOG_FILE_PREFIX: &str = "hbtui.log";

const DEFAULT_FILTER: &str = "info";

/// Keeps the background writer alive. Dropping it flushes pending lines.
pub struct LogGuard {
    directory: PathBuf,
    _worker: WorkerGuard,
}

impl LogGuard {
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

/// Install the global subscriber. Returns `None` when logging could not be
/// set up; the browser runs without logs in that case.
pub fn init_logging(log_level: Option<&str>) -> Option<LogGuard> {
    let directory = log_directory()?;
    std::fs::create_dir_all(&directory).ok()?;

    let (writer, worker) = file_writer(&directory);
    let filter = build_env_filter(log_level, std::env::var(LOG_ENV).ok().as_deref());
    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true),
    );

    // Keep the guard even if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
    Some(LogGuard {
        directory,
        _worker: worker,
    })
}

/// Non-blocking writer over a daily rolling file in `directory`.
pub fn file_writer(directory: &Path) -> (NonBlocking, WorkerGuard) {
    let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
    tracing_appender::non_blocking(appender)
}

/// `<data_dir>/hbtui/`
pub fn log_directory() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("hbtui"))
}

/// Precedence: explicit level, then the environment value, then `info`.
/// Unparseable directives fall through to the next source.
pub fn build_env_filter(log_level: Option<&str>, env_level: Option<&str>) -> EnvFilter {
    [log_level, env_level]
        .into_iter()
        .flatten()
        .find_map(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
