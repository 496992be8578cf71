//! Log setup
//!
//! The terminal belongs to the UI while the app runs, so tracing output
//! goes to a file. `CRIMICAM_LOG` overrides the configured filter.

use crate::config::LoggingOptions;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive
pub const LOG_ENV: &str = "CRIMICAM_LOG";

/// Default log file location
pub fn default_log_path() -> Result<PathBuf> {
    let dir = dirs::data_local_dir()
        .context("Could not determine data directory")?
        .join("crimicam");
    Ok(dir.join("crimicam.log"))
}

/// Build the filter from the environment, falling back to the config level
pub fn build_filter(options: &LoggingOptions) -> Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive)
            .with_context(|| format!("Invalid {} filter {:?}", LOG_ENV, directive)),
        Err(_) => EnvFilter::try_new(&options.level)
            .with_context(|| format!("Invalid log level {:?}", options.level)),
    }
}

/// Install the global subscriber. Returns the file being written to.
pub fn init(options: &LoggingOptions) -> Result<PathBuf> {
    let path = match &options.file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {:?}", parent))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(options)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(path)
}
