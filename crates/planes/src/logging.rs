//! Logging setup for planes.
//!
//! Every run appends timestamped entries to a log file and mirrors warnings
//! (or more, with `-v`) to stderr. The subscriber is owned by a [`Logger`]
//! value rather than installed globally: it is active from [`Logger::init`]
//! until the logger is dropped, and dropping it flushes the log file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::subscriber::DefaultGuard;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::{self, format::Writer, time::FormatTime};
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Timestamp layout for log entries, with millisecond precision.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Verbosity level for stderr output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Suppress all output except errors.
    Quiet,
    /// Warnings and errors.
    #[default]
    Normal,
    /// Verbose output (debug and above).
    Verbose,
    /// Very verbose output (trace level).
    Trace,
}

impl Verbosity {
    /// Convert verbosity to tracing level filter.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Local wall-clock timestamps with milliseconds.
#[derive(Debug, Clone, Copy, Default)]
struct MillisTimer;

impl FormatTime for MillisTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Shared handle to the buffered log file.
#[derive(Debug, Clone)]
struct LogFile(Arc<Mutex<BufWriter<File>>>);

impl LogFile {
    fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| Error::LogFileOpen {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self(Arc::new(Mutex::new(BufWriter::new(file)))))
    }
}

impl Write for LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?
            .flush()
    }
}

/// The active logging setup for one run.
///
/// Keep the value alive for as long as events should be recorded.
#[derive(Debug)]
pub struct Logger {
    path: Option<PathBuf>,
    file: Option<LogFile>,
    _guard: DefaultGuard,
}

impl Logger {
    /// Open the log file (if enabled) and start recording events.
    ///
    /// Stderr output follows `verbosity`; the `RUST_LOG` environment
    /// variable overrides it. The file always records `INFO` and above.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file or its directory cannot be created.
    pub fn init(config: &LoggingConfig, verbosity: Verbosity) -> Result<Self> {
        let path = config.file_enabled.then(|| config.log_file());
        let file = path.as_deref().map(LogFile::open).transpose()?;

        let default_filter = format!("planes={}", verbosity.to_level_filter());
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

        let stderr_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_filter(env_filter);

        let file_layer = file.clone().map(|file| {
            fmt::layer()
                .with_writer(move || file.clone())
                .with_ansi(false)
                .with_target(false)
                .with_timer(MillisTimer)
                .with_filter(LevelFilter::INFO)
        });

        let subscriber = tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer);
        let guard = tracing::subscriber::set_default(subscriber);

        Ok(Self {
            path,
            file,
            _guard: guard,
        })
    }

    /// Path of the log file being written, if file logging is enabled.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Flush buffered entries to the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn flush(&self) -> Result<()> {
        if let Some(file) = &self.file {
            file.clone().flush()?;
        }
        Ok(())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Initialize logging for tests.
///
/// This sets up a minimal logging configuration suitable for tests.
/// It only logs warnings and errors by default to keep test output clean.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
