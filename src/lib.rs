//! dirhash: Directory Content Manifests
//!
//! Walks a directory tree, computes a SHA-256 digest of every regular file and
//! writes the sorted path → digest mapping as JSON to `<root>/.hash`, so that
//! two runs can be compared to detect changed, added or removed files.

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod logging;
pub mod manifest;
pub mod tree;

pub use error::ManifestError;
pub use generator::{generate, ManifestGenerator};
pub use manifest::Manifest;
