//! # Logging Utilities
//!
//! Logging infrastructure for gll using `tracing`.
//!
//! This module provides structured logging with support for:
//! - Pretty (development) and JSON (machine-readable) output
//! - Environment variable configuration
//! - Log level filtering
//! - Optional file output next to, or instead of, the console
//!
//! Console output goes to stderr: stdout belongs to the commands that print
//! results (`gll symbols`).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gll_utils::init_logging;
//!
//! // Reads RUST_LOG, GLL_LOG_FORMAT and GLL_LOG_FILE
//! let _guard = init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Parsing glcorearb.h...");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=gll_core=trace`)
//! - `GLL_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `GLL_LOG_FILE`: Optional path to log file (if not set, logs only to the console)
//!
//! ## Examples
//!
//! ```rust,no_run
//! use gll_utils::{LogFormat, LogLevel, init_logging_with_level};
//!
//! let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
//!     .expect("Failed to initialize logging");
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, fs, io};

use chrono::{NaiveDate, Utc};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "GLL_LOG_FORMAT";

/// Environment variable naming an extra log file
pub const LOG_FILE_ENV: &str = "GLL_LOG_FILE";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default)
    #[default]
    Pretty,
    /// JSON format, one object per event
    Json,
}

impl FromStr for LogFormat
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {s}. Use 'pretty' or 'json'")),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default)
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            )),
        }
    }
}

/// Keeps the background file writer alive
///
/// File output is written by a worker thread; dropping the guard flushes it
/// and stops file logging. Hold it for as long as the program runs.
#[must_use = "dropping the guard stops file logging"]
#[derive(Default)]
pub struct LogGuard
{
    _worker: Option<WorkerGuard>,
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables:
/// - `RUST_LOG`: Log level filter (e.g., `debug`, `gll_core=debug`)
/// - `GLL_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
/// - `GLL_LOG_FILE`: Optional path to log file
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - The log file's directory cannot be created
pub fn init_logging() -> Result<LogGuard, LoggingError>
{
    let format = env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|s| LogFormat::from_str(&s).ok())
        .unwrap_or_default();

    init_logging_internal(format, level_filter(None))
}

/// Initialize logging with explicit level and format
///
/// `level` takes precedence over `RUST_LOG`.
///
/// ## Errors
///
/// Returns an error if logging is already initialized or file logging fails.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LogGuard, LoggingError>
{
    init_logging_internal(format, level_filter(Some(level)))
}

/// Initialize file-only logging into `dir`
///
/// The file is named `YYYY-MM-DD-gll.log` (UTC date) and appended to across
/// runs on the same day. Nothing is written to the console.
///
/// ## Arguments
///
/// * `level` - Optional log level. If `None`, uses `RUST_LOG` or defaults to `INFO`.
///
/// ## Example
///
/// ```rust,no_run
/// use gll_utils::{LogLevel, init_logging_to_dir};
///
/// let (path, _guard) = init_logging_to_dir("logs", Some(LogLevel::Debug))
///     .expect("Failed to initialize logging");
/// eprintln!("logging to {}", path.display());
/// ```
///
/// ## Errors
///
/// Returns an error if `dir` cannot be created or logging is already initialized.
pub fn init_logging_to_dir(dir: impl AsRef<Path>, level: Option<LogLevel>) -> Result<(PathBuf, LogGuard), LoggingError>
{
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let file_name = log_file_name(Utc::now().date_naive());
    let log_file = dir.join(&file_name);

    let env_filter = level_filter(level);

    // The date is already in the name, so the file never rolls
    let (writer, worker) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    let layers = vec![file_layer(writer, LogFormat::Pretty)];
    install(layers, env_filter)?;

    Ok((log_file, LogGuard { _worker: Some(worker) }))
}

/// `YYYY-MM-DD-gll.log`
fn log_file_name(date: NaiveDate) -> String
{
    format!("{}-gll.log", date.format("%Y-%m-%d"))
}

/// Explicit level beats `RUST_LOG`, which beats `INFO`.
fn level_filter(level: Option<LogLevel>) -> EnvFilter
{
    match level {
        Some(level) => EnvFilter::new(Level::from(level).to_string()),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string())),
    }
}

fn init_logging_internal(format: LogFormat, env_filter: EnvFilter) -> Result<LogGuard, LoggingError>
{
    let mut layers = vec![console_layer(format)];
    let mut guard = LogGuard::default();

    if let Some(file_path) = env::var(LOG_FILE_ENV).ok().map(PathBuf::from) {
        let directory = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let Some(file_name) = file_path.file_name() else {
            return Err(LoggingError::InvalidFile(file_path));
        };
        fs::create_dir_all(&directory)?;

        let (writer, worker) = tracing_appender::non_blocking(tracing_appender::rolling::daily(directory, file_name));
        layers.push(file_layer(writer, format));
        guard._worker = Some(worker);
    }

    install(layers, env_filter)?;
    Ok(guard)
}

fn console_layer(format: LogFormat) -> BoxedLayer
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .with_writer(io::stderr)
            .boxed(),
    }
}

fn file_layer<W>(writer: W, format: LogFormat) -> BoxedLayer
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_ansi(false) // No ANSI in files
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true)
            .with_timer(ChronoUtc::rfc_3339())
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    }
}

fn install(layers: Vec<BoxedLayer>, env_filter: EnvFilter) -> Result<(), LoggingError>
{
    Registry::default()
        .with(layers.with_filter(env_filter))
        .try_init()
        .map_err(|err| LoggingError::InitializationFailed(err.to_string()))
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// The configured log file path has no file name
    #[error("Invalid log file: {}", .0.display())]
    InvalidFile(PathBuf),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),

    /// File logging error
    #[error("File logging error: {0}")]
    FileError(#[from] io::Error),
}
