//! Logging setup.
//!
//! Logging is off unless `LUSH_LOG` or the config file's `logging.level` asks for it, so
//! the error stream normally carries nothing but command diagnostics.

use crate::PROGRAM_NAME;
use crate::conf::ConfigurationModel;
use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "LUSH_LOG";

/// Pick the filter: `LUSH_LOG` first, then the configured level, else `off`.
///
/// A configured level that does not parse is reported once and ignored.
pub fn build_filter(config: &ConfigurationModel) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }

    let Some(level) = config.logging.level.as_deref() else {
        return EnvFilter::new("off");
    };

    match parse_level(level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: warning: invalid log level '{level}': {e}");
            EnvFilter::new("off")
        }
    }
}

/// Parse a filter directive such as `debug` or `lush::process=trace`.
pub fn parse_level(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}

/// Install the global subscriber. Logs go to the configured file, or to stderr.
pub fn init(config: &ConfigurationModel) {
    let filter = build_filter(config);

    if let Some(path) = config.logging.resolved_file_path(config) {
        match open_log_file(&path) {
            Ok(file) => {
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .init();
                return;
            }
            Err(e) => {
                eprintln!(
                    "{PROGRAM_NAME}: warning: could not open log file '{}': {e}",
                    path.display()
                );
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::OpenOptions::new().create(true).append(true).open(path)
}
