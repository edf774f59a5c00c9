//! Manifest generator: walk a root, digest each file, write `<root>/.hash`

use crate::config::ManifestConfig;
use crate::error::ManifestError;
use crate::manifest::Manifest;
use crate::tree::hasher;
use crate::tree::path;
use crate::tree::walker::{Walker, WalkerConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info, instrument};

/// Generate the manifest for `directory` with default settings and write it
/// to `<directory>/.hash`.
///
/// Every key must be valid UTF-8: a tree containing a file name that is not
/// is rejected with [`ManifestError::NonUtf8Path`] and no manifest is written.
pub fn generate(directory: &Path) -> Result<(), ManifestError> {
    ManifestGenerator::default().generate(directory).map(|_| ())
}

/// Builds and writes manifests according to a [`ManifestConfig`]
#[derive(Debug, Clone, Default)]
pub struct ManifestGenerator {
    config: ManifestConfig,
}

impl ManifestGenerator {
    pub fn new(config: ManifestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Location the manifest for `directory` is written to
    pub fn manifest_path(&self, directory: &Path) -> PathBuf {
        directory.join(&self.config.file_name)
    }

    /// Walk `directory` and digest every regular file, without writing anything
    #[instrument(skip(self), fields(root = %directory.display()))]
    pub fn build(&self, directory: &Path) -> Result<Manifest, ManifestError> {
        self.config.validate().map_err(ManifestError::Config)?;

        let walker = Walker::with_config(
            directory.to_path_buf(),
            WalkerConfig {
                excluded_name: self.config.file_name.clone(),
            },
        );
        let entries = match walker.walk() {
            Ok(entries) => {
                debug!(file_count = entries.len(), "Walked filesystem");
                entries
            }
            Err(e) => {
                error!("Filesystem walk failed: {}", e);
                return Err(e);
            }
        };

        let prefix = path::root_prefix(directory)?;
        let mut manifest = Manifest::new();

        for entry in entries {
            let key = path::manifest_key(&prefix, &entry.relative)?;
            let digest = hasher::compute_file_digest(&entry.path, self.config.chunk_size)?;
            debug!(key = %key, digest = %digest, "Digested file");
            manifest.insert(key, digest);
        }

        Ok(manifest)
    }

    /// Build the manifest for `directory` and write it into that directory,
    /// replacing any previous manifest.
    #[instrument(skip(self), fields(root = %directory.display()))]
    pub fn generate(&self, directory: &Path) -> Result<Manifest, ManifestError> {
        let start = Instant::now();
        info!("Starting manifest generation");

        let manifest = self.build(directory)?;

        let target = self.manifest_path(directory);
        if let Err(e) = manifest.write_to(&target, self.config.atomic_write) {
            error!(path = %target.display(), "Failed to write manifest: {}", e);
            return Err(e);
        }

        info!(
            files = manifest.len(),
            path = %target.display(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Manifest written"
        );

        Ok(manifest)
    }
}
