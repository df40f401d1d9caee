//! Tracing subscriber setup
//!
//! The terminal UI owns stdout and stderr, so it only logs when a log
//! file is configured. Headless commands log to stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{AppError, AppResult};

/// Where log output may go when no file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// The terminal is in use; stay silent without a file
    FileOnly,
    /// Fall back to stderr
    Stderr,
}

/// Computes the base filter directive from config and `-v` count
#[must_use]
pub fn filter_directive(config: &LoggingConfig, verbose: u8) -> &'static str {
    config.level.raised_by(verbose).as_directive()
}

/// Installs the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Returns whether
/// a subscriber was installed.
pub fn init(config: &LoggingConfig, verbose: u8, sink: LogSink) -> AppResult<bool> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config, verbose)));

    match (&config.file, sink) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| AppError::logging(e.to_string()))?;
            Ok(true)
        }
        (None, LogSink::Stderr) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| AppError::logging(e.to_string()))?;
            Ok(true)
        }
        (None, LogSink::FileOnly) => Ok(false),
    }
}
