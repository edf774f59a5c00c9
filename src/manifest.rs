//! Manifest: the path → digest snapshot of a directory tree
//!
//! Entries live in a `BTreeMap`, so iteration and serialization are always
//! key-sorted. The on-disk form is a 2-space indented JSON object.

use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// File name of the manifest written into the scanned root
pub const DEFAULT_MANIFEST_NAME: &str = ".hash";

/// Sorted mapping of manifest key to hex digest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
    entries: BTreeMap<String, String>,
}

impl Manifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a digest under `key`, returning the previous digest if the key was present
    pub fn insert(&mut self, key: String, digest: String) -> Option<String> {
        self.entries.insert(key, digest)
    }

    /// Look up the digest recorded for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Keys in ascending order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Render the manifest as indented, key-sorted JSON
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    /// Parse a manifest previously produced by [`Manifest::to_json`]
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write the manifest to `path`, replacing any previous content
    ///
    /// With `atomic` set the JSON is written to a temporary file in the same
    /// directory and renamed over `path`; otherwise `path` is truncated and
    /// written in place.
    pub fn write_to(&self, path: &Path, atomic: bool) -> Result<(), ManifestError> {
        let json = self.to_json()?;

        if !atomic {
            return fs::write(path, json.as_bytes()).map_err(|e| ManifestError::io(path, e));
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| ManifestError::io(dir, e))?;
        temp.write_all(json.as_bytes())
            .map_err(|e| ManifestError::io(temp.path(), e))?;
        temp.as_file()
            .sync_all()
            .map_err(|e| ManifestError::io(temp.path(), e))?;
        temp.persist(path)
            .map_err(|e| ManifestError::io(path, e.error))?;

        Ok(())
    }
}

impl<'a> IntoIterator for &'a Manifest {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, String)> for Manifest {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
