//! Configuration System
//!
//! Layered configuration: built-in defaults, then an optional TOML file, then
//! `DIRHASH_` prefixed environment variables (`DIRHASH_MANIFEST__CHUNK_SIZE=8192`).
//! A plain invocation without a config file uses the defaults only.

use crate::error::ManifestError;
use crate::logging::LoggingConfig;
use crate::manifest::DEFAULT_MANIFEST_NAME;
use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirhashConfig {
    /// Manifest generation settings
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Manifest generation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Name of the manifest file written into the root (and excluded from it)
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// Read buffer size used while digesting files
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Write through a temporary file and rename instead of overwriting in place
    #[serde(default)]
    pub atomic_write: bool,
}

fn default_file_name() -> String {
    DEFAULT_MANIFEST_NAME.to_string()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            chunk_size: default_chunk_size(),
            atomic_write: false,
        }
    }
}

impl ManifestConfig {
    /// Validate manifest settings
    pub fn validate(&self) -> Result<(), String> {
        if self.file_name.is_empty() {
            return Err("Manifest file name cannot be empty".to_string());
        }
        if self.file_name == "." || self.file_name == ".." {
            return Err(format!("Invalid manifest file name: {}", self.file_name));
        }
        if self.file_name.contains('/') || self.file_name.contains('\\') {
            return Err(format!(
                "Manifest file name must not contain a path separator: {}",
                self.file_name
            ));
        }
        if self.chunk_size == 0 {
            return Err("Chunk size must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl DirhashConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ManifestError> {
        self.manifest
            .validate()
            .map_err(|e| ManifestError::Config(format!("manifest: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| ManifestError::Config(format!("logging: {}", e)))?;
        Ok(())
    }
}

/// Loads [`DirhashConfig`] from its sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Built-in defaults only
    pub fn defaults() -> DirhashConfig {
        DirhashConfig::default()
    }

    /// Defaults, then the TOML file at `path`, then `DIRHASH_` environment overrides
    pub fn load_from_file(path: &Path) -> Result<DirhashConfig, ManifestError> {
        let config: DirhashConfig = builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true))
            .add_source(
                Environment::with_prefix("DIRHASH")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }
}

/// Create a Config builder with the manifest defaults applied.
fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("manifest.file_name", DEFAULT_MANIFEST_NAME)?
        .set_default("manifest.chunk_size", DEFAULT_CHUNK_SIZE as i64)?
        .set_default("manifest.atomic_write", false)
}
