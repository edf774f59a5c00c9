//! Content digests using SHA-256

use crate::error::ManifestError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read granularity for streaming file contents
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Length of a rendered digest (32 bytes as lowercase hex)
pub const DIGEST_HEX_LEN: usize = 64;

/// Compute the digest of a file by streaming it in `chunk_size` chunks
///
/// The file is closed before returning, including when a read fails.
pub fn compute_file_digest(path: &Path, chunk_size: usize) -> Result<String, ManifestError> {
    if chunk_size == 0 {
        return Err(ManifestError::Config(
            "chunk size must be greater than zero".to_string(),
        ));
    }

    let mut file = File::open(path).map_err(|e| ManifestError::io(path, e))?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; chunk_size];

    loop {
        let read = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ManifestError::io(path, e)),
        };
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Compute the digest of in-memory bytes
pub fn compute_content_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
