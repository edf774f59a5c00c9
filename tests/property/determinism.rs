//! Property-based tests for determinism guarantees

use dirhash::tree::hasher::{compute_content_digest, compute_file_digest};
use dirhash::{generate, Manifest};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Digest does not depend on read granularity
    #[test]
    fn file_digest_independent_of_chunk_size(
        content in proptest::collection::vec(any::<u8>(), 0..20_000),
        chunk_size in 1usize..9_000,
    ) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data");
        fs::write(&path, &content).unwrap();

        let streamed = compute_file_digest(&path, chunk_size).unwrap();
        prop_assert_eq!(streamed, compute_content_digest(&content));
    }

    /// Same contents always produce byte-identical manifests
    #[test]
    fn manifest_bytes_deterministic(
        files in proptest::collection::btree_map("[a-z]{1,8}(/[a-z]{1,8}){0,2}", any::<Vec<u8>>(), 0..8),
    ) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let mut written = 0;
        for (relative, content) in &files {
            let path = root.join(relative);
            // a shorter key may already occupy a parent as a file
            if fs::create_dir_all(path.parent().unwrap()).is_ok() && fs::write(&path, content).is_ok() {
                written += 1;
            }
        }

        generate(root).unwrap();
        let first = fs::read(root.join(".hash")).unwrap();
        generate(root).unwrap();
        let second = fs::read(root.join(".hash")).unwrap();
        prop_assert_eq!(&first, &second);

        let manifest = Manifest::from_json(std::str::from_utf8(&first).unwrap()).unwrap();
        let keys: Vec<_> = manifest.keys().collect();
        prop_assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(manifest.len(), written);
    }
}

#[test]
fn test_different_content_different_digest() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(any::<Vec<u8>>(), any::<Vec<u8>>()), |(content1, content2)| {
            let digest1 = compute_content_digest(&content1);
            let digest2 = compute_content_digest(&content2);

            if content1 == content2 {
                prop_assert_eq!(digest1, digest2);
            } else {
                prop_assert_ne!(digest1, digest2);
            }

            Ok(())
        })
        .unwrap();
}
