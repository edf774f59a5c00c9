//! Logging System
//!
//! Structured logging using the `tracing` crate. Logging is off by default so
//! a successful run stays silent; diagnostics go to stderr or a file, never to
//! stdout.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a full filter directive (overrides the configured level)
pub const LOG_ENV: &str = "DIRHASH_LOG";

/// Environment variable overriding the output format
pub const LOG_FORMAT_ENV: &str = "DIRHASH_LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

impl LoggingConfig {
    /// Check format and output values without touching the global subscriber
    pub fn validate(&self) -> Result<(), String> {
        if self.format != "json" && self.format != "text" {
            return Err(format!(
                "Invalid log format: {} (must be 'json' or 'text')",
                self.format
            ));
        }
        match self.output.as_str() {
            "stderr" => Ok(()),
            "file" if self.file.is_some() => Ok(()),
            "file" => Err("Log output 'file' requires logging.file to be set".to_string()),
            other => Err(format!(
                "Invalid log output: {} (must be 'stderr' or 'file')",
                other
            )),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. `DIRHASH_LOG` / `DIRHASH_LOG_FORMAT` environment variables
/// 2. The supplied config (CLI flags already merged in)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ManifestError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);
    config.validate().map_err(ManifestError::Config)?;

    let filter = build_env_filter(config)?;
    let format = determine_format(config);
    let base_subscriber = Registry::default().with(filter);

    let result = match (format.as_str(), &config.file) {
        ("json", Some(path)) if config.output == "file" => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(Mutex::new(open_log_file(path)?)),
            )
            .try_init(),
        ("json", _) => base_subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        (_, Some(path)) if config.output == "file" => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(Mutex::new(open_log_file(path)?)),
            )
            .try_init(),
        _ => base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| ManifestError::Config(format!("Failed to initialize logging: {}", e)))
}

fn open_log_file(path: &Path) -> Result<std::fs::File, ManifestError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| ManifestError::io(parent, e))?;
        }
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ManifestError::io(path, e))
}

/// Build the filter from `DIRHASH_LOG` or the configured level
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ManifestError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| ManifestError::Config(format!("Invalid log level '{}': {}", config.level, e)))
}

fn determine_format(config: &LoggingConfig) -> String {
    match std::env::var(LOG_FORMAT_ENV) {
        Ok(format) if format == "json" || format == "text" => format,
        _ => config.format.clone(),
    }
}
