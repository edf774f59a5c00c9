//! CLI parse: clap types for dirhash. No behavior; definitions only.

use clap::Parser;
use std::path::PathBuf;

/// dirhash - write a SHA-256 manifest of a directory tree to `<DIRECTORY>/.hash`
#[derive(Debug, Parser)]
#[command(name = "dirhash")]
#[command(about = "Write a sorted SHA-256 manifest of every file under a directory")]
pub struct Cli {
    /// Directory to scan; the manifest is written inside it
    pub directory: PathBuf,

    /// Configuration file path (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging on stderr (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}
