//! Directory Tree Traversal
//!
//! Enumerates the regular files under a root, computes their content digests
//! and derives the posix-style keys they are recorded under.

pub mod hasher;
pub mod path;
pub mod walker;
