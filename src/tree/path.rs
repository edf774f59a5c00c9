//! Manifest key formation
//!
//! Keys are posix-style: the root as given by the caller (normalized, with `.`
//! components and trailing separators dropped) joined with the file's path
//! relative to the root, always separated by `/`.

use crate::error::ManifestError;
use std::path::{Component, Path};

/// Normalize the root path into the prefix shared by every key
///
/// `.` yields an empty prefix so keys are bare relative paths.
pub fn root_prefix(root: &Path) -> Result<String, ManifestError> {
    let mut prefix = String::new();
    let mut parts: Vec<&str> = Vec::new();

    for component in root.components() {
        match component {
            Component::Prefix(p) => {
                let drive = p
                    .as_os_str()
                    .to_str()
                    .ok_or_else(|| ManifestError::NonUtf8Path(root.to_path_buf()))?;
                prefix.push_str(&drive.replace('\\', "/"));
            }
            Component::RootDir => prefix.push('/'),
            Component::CurDir => {}
            Component::ParentDir => parts.push(".."),
            Component::Normal(name) => parts.push(
                name.to_str()
                    .ok_or_else(|| ManifestError::NonUtf8Path(root.to_path_buf()))?,
            ),
        }
    }

    prefix.push_str(&parts.join("/"));
    Ok(prefix)
}

/// Build the manifest key for a file given its path relative to the root
pub fn manifest_key(prefix: &str, relative: &Path) -> Result<String, ManifestError> {
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(name) => parts.push(
                name.to_str()
                    .ok_or_else(|| ManifestError::NonUtf8Path(relative.to_path_buf()))?,
            ),
            Component::CurDir => {}
            _ => {
                return Err(ManifestError::Config(format!(
                    "expected a path relative to the root, got {}",
                    relative.display()
                )))
            }
        }
    }

    let relative = parts.join("/");
    Ok(if prefix.is_empty() {
        relative
    } else if prefix.ends_with('/') {
        format!("{}{}", prefix, relative)
    } else {
        format!("{}/{}", prefix, relative)
    })
}
