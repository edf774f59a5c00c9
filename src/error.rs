//! Error types for manifest generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking, digesting or writing a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(PathBuf),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ManifestError {
    /// Attach the offending path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the underlying cause is a missing file or directory
    pub fn is_not_found(&self) -> bool {
        match self {
            ManifestError::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            ManifestError::Walk(e) => e
                .io_error()
                .map(|io| io.kind() == std::io::ErrorKind::NotFound)
                .unwrap_or(false),
            _ => false,
        }
    }
}

impl From<config::ConfigError> for ManifestError {
    fn from(err: config::ConfigError) -> Self {
        ManifestError::Config(err.to_string())
    }
}
