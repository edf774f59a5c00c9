//! CLI route: run context built from the optional config file, dispatching to the generator.

use crate::config::{ConfigLoader, DirhashConfig};
use crate::error::ManifestError;
use crate::generator::ManifestGenerator;
use crate::manifest::Manifest;
use std::path::{Path, PathBuf};

/// Runtime context for CLI execution: resolved configuration and the generator.
pub struct RunContext {
    config: DirhashConfig,
    config_path: Option<PathBuf>,
    generator: ManifestGenerator,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ManifestError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::defaults(),
        };
        Ok(Self::with_config(config, config_path))
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(config: DirhashConfig, config_path: Option<PathBuf>) -> Self {
        let generator = ManifestGenerator::new(config.manifest.clone());
        Self {
            config,
            config_path,
            generator,
        }
    }

    pub fn config(&self) -> &DirhashConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Generate and write the manifest for `directory`.
    pub fn execute(&self, directory: &Path) -> Result<Manifest, ManifestError> {
        self.generator.generate(directory)
    }
}
