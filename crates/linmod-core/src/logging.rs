//! Structured logging setup.
//!
//! Library code emits `tracing` events with `component`, `operation` and
//! `status` fields. Applications opt in to seeing them with [`init_logging`].

use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive, e.g. `debug` or `linmod_core=trace`. Defaults to `off`.
pub const TRACE_ENV: &str = "LINMOD_TRACE";
/// `pretty` (default) or `json`.
pub const FORMAT_ENV: &str = "LINMOD_LOG_FORMAT";
/// Optional file that receives a copy of every event.
pub const FILE_ENV: &str = "LINMOD_LOG_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    InvalidFilter { reason: String },
    InvalidFormat { value: String },
    LogFile { path: PathBuf, reason: String },
    Init { reason: String },
}

impl LoggingError {
    /// Returns a semantic error code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            LoggingError::InvalidFilter { .. } => "LOG_INVALID_FILTER",
            LoggingError::InvalidFormat { .. } => "LOG_INVALID_FORMAT",
            LoggingError::LogFile { .. } => "LOG_FILE",
            LoggingError::Init { .. } => "LOG_INIT",
        }
    }
}

impl std::fmt::Display for LoggingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoggingError::InvalidFilter { reason } => {
                write!(f, "[{}] Invalid log filter: {}", self.code(), reason)
            }
            LoggingError::InvalidFormat { value } => write!(
                f,
                "[{}] Invalid log format '{}' (expected 'json' or 'pretty')",
                self.code(),
                value
            ),
            LoggingError::LogFile { path, reason } => write!(
                f,
                "[{}] Failed to open log file {}: {}",
                self.code(),
                path.display(),
                reason
            ),
            LoggingError::Init { reason } => {
                write!(f, "[{}] Failed to initialize logging: {}", self.code(), reason)
            }
        }
    }
}

impl std::error::Error for LoggingError {}

/// Output encoding of log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("pretty") {
            Ok(LogFormat::Pretty)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(LogFormat::Json)
        } else {
            Err(LoggingError::InvalidFormat {
                value: value.to_string(),
            })
        }
    }
}

/// Logging configuration. `None` fields fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Filter directive. `None` means logging is off.
    pub level: Option<String>,
    /// Output format. `None` means pretty.
    pub format: Option<LogFormat>,
    /// Mirror events to this file (appending, no ANSI colors).
    pub log_file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Create a new configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `LINMOD_TRACE`, `LINMOD_LOG_FORMAT` and `LINMOD_LOG_FILE`.
    pub fn from_env() -> Result<Self, LoggingError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`LoggingConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LoggingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = lookup(FORMAT_ENV)
            .map(|value| value.parse::<LogFormat>())
            .transpose()?;
        Ok(Self {
            level: lookup(TRACE_ENV),
            format,
            log_file: lookup(FILE_ENV).map(PathBuf::from),
        })
    }

    /// Set the filter directive.
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Mirror events to a file.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Check if this configuration is completely empty (all defaults).
    pub fn is_empty(&self) -> bool {
        self.level.is_none() && self.format.is_none() && self.log_file.is_none()
    }

    /// Build the event filter for this configuration.
    pub fn filter(&self) -> Result<EnvFilter, LoggingError> {
        match self.level.as_deref() {
            None => Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into())),
            Some(level) if level.eq_ignore_ascii_case("off") => {
                Ok(EnvFilter::default().add_directive(LevelFilter::OFF.into()))
            }
            Some(level) => EnvFilter::try_new(level).map_err(|err| LoggingError::InvalidFilter {
                reason: err.to_string(),
            }),
        }
    }
}

fn open_log_file(path: &Path) -> Result<Mutex<File>, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Mutex::new)
        .map_err(|err| LoggingError::LogFile {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })
}

fn map_init_err<E: std::fmt::Display>(err: E) -> LoggingError {
    LoggingError::Init {
        reason: err.to_string(),
    }
}

/// Install a global subscriber for `config`.
///
/// Returns `Ok(true)` when logging is initialized and `Ok(false)` if a
/// subscriber is already configured.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    if tracing::dispatcher::has_been_set() {
        return Ok(false);
    }

    let filter = config.filter()?;
    let file = config.log_file.as_deref().map(open_log_file).transpose()?;

    match config.format.unwrap_or_default() {
        LogFormat::Json => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .json();
            let file_layer = file.map(|file| {
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .json()
            });
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()
                .map_err(map_init_err)?;
        }
        LogFormat::Pretty => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .pretty();
            let file_layer = file.map(|file| {
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false)
                    .pretty()
            });
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init()
                .map_err(map_init_err)?;
        }
    }

    tracing::debug!(
        component = "logging",
        operation = "init",
        status = "success",
        "Logging initialized"
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_config_new_is_empty() {
        assert!(LoggingConfig::new().is_empty());
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level("debug")
            .with_format(LogFormat::Json)
            .with_log_file("/tmp/linmod.log");
        assert!(!config.is_empty());
        assert_eq!(config.level.as_deref(), Some("debug"));
        assert_eq!(config.format, Some(LogFormat::Json));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/linmod.log")));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let config = LoggingConfig::from_lookup(lookup_from(&[
            (TRACE_ENV, "linmod_core=trace"),
            (FORMAT_ENV, "JSON"),
            (FILE_ENV, "run.log"),
        ]))
        .unwrap();
        assert_eq!(config.level.as_deref(), Some("linmod_core=trace"));
        assert_eq!(config.format, Some(LogFormat::Json));
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
    }

    #[test]
    fn test_from_lookup_defaults_when_unset() {
        let config = LoggingConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let err = LoggingConfig::from_lookup(lookup_from(&[(FORMAT_ENV, "xml")])).unwrap_err();
        assert_eq!(
            err,
            LoggingError::InvalidFormat {
                value: "xml".to_string()
            }
        );
        assert!(err.to_string().starts_with("[LOG_INVALID_FORMAT]"));
    }

    #[test]
    fn test_filter_parsing() {
        assert!(LoggingConfig::new().filter().is_ok());
        assert!(LoggingConfig::new().with_level("OFF").filter().is_ok());
        assert!(LoggingConfig::new().with_level("warn").filter().is_ok());
        let err = LoggingConfig::new()
            .with_level("linmod=notalevel")
            .filter()
            .unwrap_err();
        assert_eq!(err.code(), "LOG_INVALID_FILTER");
    }
}
