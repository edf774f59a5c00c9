//! Filesystem walker for collecting the regular files under a root

use crate::error::ManifestError;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;
use walkdir::{DirEntry, WalkDir};

/// A regular file found under the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Path as reached through the walk (root joined with `relative`)
    pub path: PathBuf,
    /// Path relative to the root
    pub relative: PathBuf,
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// File name excluded at every depth (the manifest itself)
    pub excluded_name: String,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            excluded_name: crate::manifest::DEFAULT_MANIFEST_NAME.to_string(),
        }
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the filesystem and collect every regular file
    ///
    /// Symlinks to regular files are included; symlinked directories are not
    /// descended into. Returns entries sorted by relative path. The first
    /// error aborts the walk.
    pub fn walk(&self) -> Result<Vec<Entry>, ManifestError> {
        let metadata = fs::metadata(&self.root).map_err(|e| ManifestError::io(&self.root, e))?;
        if !metadata.is_dir() {
            return Err(ManifestError::NotADirectory(self.root.clone()));
        }

        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;

            if entry.file_type().is_dir() {
                continue;
            }

            if entry.file_name() == OsStr::new(&self.config.excluded_name) {
                trace!(path = %entry.path().display(), "Skipping manifest file");
                continue;
            }

            if !is_regular_file(&entry) {
                trace!(path = %entry.path().display(), "Skipping non-regular entry");
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.root)
                .map(Path::to_path_buf)
                .map_err(|_| {
                    ManifestError::Config(format!(
                        "walked outside of root: {}",
                        entry.path().display()
                    ))
                })?;

            entries.push(Entry {
                path: entry.into_path(),
                relative,
            });
        }

        entries.sort_by(|a, b| a.relative.cmp(&b.relative));

        Ok(entries)
    }
}

/// Regular-file check that follows symlinks
///
/// A link whose target cannot be resolved (dangling, looping, or through a
/// non-directory) is not a regular file.
fn is_regular_file(entry: &DirEntry) -> bool {
    if !entry.path_is_symlink() {
        return entry.file_type().is_file();
    }

    match fs::metadata(entry.path()) {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            trace!(path = %entry.path().display(), error = %e, "Unresolvable symlink");
            false
        }
    }
}
