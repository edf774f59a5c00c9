//! Integration tests for the `dirhash` binary: arguments, exit codes, output.

use super::test_utils::{read_manifest, write_file};
use std::fs;
use std::process::Command;
use tempfile::TempDir;

const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn dirhash() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_dirhash"));
    command.env_remove("DIRHASH_LOG").env_remove("DIRHASH_LOG_FORMAT");
    command
}

#[test]
fn test_success_is_silent_and_keys_use_given_root() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("mydir");
    write_file(&root, "a.txt", "abc");
    write_file(&root, "sub/b.bin", "b");

    let output = dirhash()
        .current_dir(temp_dir.path())
        .arg("mydir")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "dirhash should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let manifest = read_manifest(&root);
    let keys: Vec<_> = manifest.keys().cloned().collect();
    assert_eq!(keys, vec!["mydir/a.txt", "mydir/sub/b.bin"]);
    assert_eq!(manifest["mydir/a.txt"], ABC_SHA256);
}

#[test]
fn test_trailing_slash_and_dot_root_are_normalized() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("mydir");
    write_file(&root, "a.txt", "abc");

    let status = dirhash()
        .current_dir(temp_dir.path())
        .arg("./mydir/")
        .status()
        .unwrap();
    assert!(status.success());
    assert!(read_manifest(&root).contains_key("mydir/a.txt"));

    let status = dirhash().current_dir(&root).arg(".").status().unwrap();
    assert!(status.success());
    let keys: Vec<_> = read_manifest(&root).keys().cloned().collect();
    assert_eq!(keys, vec!["a.txt"]);
}

#[test]
fn test_missing_directory_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();

    let output = dirhash()
        .current_dir(temp_dir.path())
        .arg("nope")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("dirhash: "), "stderr={}", stderr);
    assert!(!temp_dir.path().join("nope").exists());
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = dirhash().output().unwrap();
    assert!(!output.status.success());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "a.txt", "abc");

    let output = dirhash()
        .arg("--verbose")
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty(), "stdout must stay clean");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Manifest written"), "stderr={}", stderr);
}

#[test]
fn test_config_file_enables_atomic_write_and_custom_name() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("root");
    write_file(&root, "a.txt", "abc");
    let config_path = temp_dir.path().join("dirhash.toml");
    fs::write(
        &config_path,
        "[manifest]\nfile_name = \"MANIFEST.json\"\natomic_write = true\nchunk_size = 7\n",
    )
    .unwrap();

    let status = dirhash()
        .arg("--config")
        .arg(&config_path)
        .arg(&root)
        .status()
        .unwrap();

    assert!(status.success());
    assert!(!root.join(".hash").exists());
    let raw = fs::read_to_string(root.join("MANIFEST.json")).unwrap();
    assert!(raw.contains(ABC_SHA256));
}

#[test]
fn test_invalid_config_exits_non_zero() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("dirhash.toml");
    fs::write(&config_path, "[manifest]\nchunk_size = 0\n").unwrap();

    let output = dirhash()
        .arg("--config")
        .arg(&config_path)
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!temp_dir.path().join(".hash").exists());
}
