//! Logger setup.
//!
//! The terminal is in raw mode on the alternate screen while the game runs,
//! so log records go to a file instead of stderr.

use crate::config::LoggingConfig;
use crate::utils::persistence;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;

pub const LOG_FILE: &str = "flapper.log";

/// Install the global logger. `RUST_LOG` wins over the configured level.
///
/// Returns the log file path. Calling this twice leaves the first logger in place.
pub fn init(config: &LoggingConfig) -> io::Result<PathBuf> {
    let path = match &config.file {
        Some(path) => path.clone(),
        None => persistence::data_path(LOG_FILE)?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let result = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.level.as_str()),
    )
    .target(env_logger::Target::Pipe(Box::new(file)))
    .format_timestamp_millis()
    .try_init();

    if result.is_err() {
        log::debug!("Logger already initialised; keeping the existing one");
    }
    Ok(path)
}

/// Like [`init`], but a log file that cannot be opened only costs the log.
///
/// Prints a warning to stderr (the terminal is not in raw mode yet) and returns None.
pub fn init_or_warn(config: &LoggingConfig) -> Option<PathBuf> {
    match init(config) {
        Ok(path) => Some(path),
        Err(e) => {
            eprintln!("Warning: could not open log file: {}. Continuing without logging.", e);
            None
        }
    }
}
