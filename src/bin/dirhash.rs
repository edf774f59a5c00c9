//! dirhash CLI Binary
//!
//! Writes a sorted SHA-256 manifest of a directory tree to `<DIRECTORY>/.hash`.
//! Silent on success; prints one line on stderr and exits 1 on failure.

use clap::Parser;
use dirhash::cli::{Cli, RunContext};
use dirhash::config::{ConfigLoader, DirhashConfig};
use dirhash::logging::{init_logging, LoggingConfig};
use dirhash::ManifestError;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", dirhash::cli::map_error(&e));
            process::exit(1);
        }
    };

    // Build logging config from CLI args and config file
    let logging_config = build_logging_config(&cli, &config);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("{}", dirhash::cli::map_error(&e));
        process::exit(1);
    }

    info!("dirhash starting");

    let context = RunContext::with_config(config, cli.config.clone());

    match context.execute(&cli.directory) {
        Ok(manifest) => {
            info!(files = manifest.len(), "Command completed successfully");
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", dirhash::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Load the config file named on the command line, or the defaults.
fn load_config(cli: &Cli) -> Result<DirhashConfig, ManifestError> {
    match cli.config {
        Some(ref config_path) => ConfigLoader::load_from_file(config_path),
        None => Ok(ConfigLoader::defaults()),
    }
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &DirhashConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }

    logging
}
