//! Configuration management
//!
//! This module handles loading, validation, and merging of crate configuration.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{OpsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Prefix of every environment variable read by [`Config::from_env`]
pub const ENV_PREFIX: &str = "THALIA_";

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Batch orchestration settings
    #[serde(default)]
    pub batch: BatchConfig,
    /// Failure notification settings
    #[serde(default)]
    pub notifications: NotificationConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| OpsError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)
            .map_err(|e| OpsError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `THALIA_*` environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup
    ///
    /// Unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |suffix: &str| lookup(&format!("{}{}", ENV_PREFIX, suffix));
        let mut config = Self::default();

        if let Some(value) = var("SETTLE_DELAY_MS") {
            config.batch.settle_delay_ms = parse_number(&value, "SETTLE_DELAY_MS")?;
        }
        if let Some(value) = var("OPERATION_TIMEOUT_MS") {
            config.batch.operation_timeout_ms =
                Some(parse_number(&value, "OPERATION_TIMEOUT_MS")?);
        }
        if let Some(value) = var("RESET_POLICY") {
            config.batch.reset_policy = value.parse()?;
        }
        if let Some(value) = var("EVENT_CAPACITY") {
            config.batch.event_capacity = parse_number(&value, "EVENT_CAPACITY")? as usize;
        }
        if let Some(value) = var("NOTIFICATIONS_ENABLED") {
            config.notifications.enabled = parse_flag(&value, "NOTIFICATIONS_ENABLED")?;
        }
        if let Some(value) = var("WEBHOOK_URL") {
            config.notifications.webhook_url = Some(value);
        }
        if let Some(value) = var("WEBHOOK_TIMEOUT_SECONDS") {
            config.notifications.timeout_seconds =
                parse_number(&value, "WEBHOOK_TIMEOUT_SECONDS")?;
        }
        if let Some(value) = var("LOG_LEVEL") {
            config.logging.level = value.parse()?;
        }
        if let Some(value) = var("LOG_JSON") {
            config.logging.json = parse_flag(&value, "LOG_JSON")?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.batch
            .validate()
            .map_err(|e| OpsError::validation(format!("Batch config error: {}", e)))?;

        self.notifications
            .validate()
            .map_err(|e| OpsError::validation(format!("Notification config error: {}", e)))?;

        self.logging
            .validate()
            .map_err(|e| OpsError::validation(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.batch = self.batch.merge(other.batch);
        self.notifications = self.notifications.merge(other.notifications);
        self.logging = self.logging.merge(other.logging);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| OpsError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

fn parse_number(value: &str, name: &str) -> Result<u64> {
    value.trim().parse().map_err(|e| {
        OpsError::Config(format!(
            "{}{} must be a non-negative integer: {}",
            ENV_PREFIX, name, e
        ))
    })
}

fn parse_flag(value: &str, name: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OpsError::Config(format!(
            "{}{} must be a boolean, got: {}",
            ENV_PREFIX, name, value
        ))),
    }
}
