//! Logging configuration

use crate::utils::logging::LogLevel;
use serde::{Deserialize, Serialize};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level when `RUST_LOG` is unset
    #[serde(default)]
    pub level: LogLevel,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
    /// Include the event target in each line
    #[serde(default)]
    pub with_target: bool,
}

impl LoggingConfig {
    /// Merge logging configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != LogLevel::default() {
            self.level = other.level;
        }
        self.json |= other.json;
        self.with_target |= other.with_target;
        self
    }
}
