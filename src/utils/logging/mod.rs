//! Logging setup
//!
//! Installs the process-wide `tracing` subscriber from [`LoggingConfig`].

mod types;

pub use types::LogLevel;

use crate::config::LoggingConfig;
use crate::utils::error::{OpsError, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for a logging configuration.
///
/// `RUST_LOG` wins over the configured level when it is set and parses.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_filter_directive()))
}

/// Initialize the global tracing subscriber.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(config.with_target)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| OpsError::logging(format!("Failed to install subscriber: {}", e)))
}
