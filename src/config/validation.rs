//! Configuration validation
//!
//! This module provides validation logic for all configuration structures.

use super::models::*;
use tracing::debug;
use url::Url;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating batch configuration");

        if self.event_capacity == 0 {
            return Err("Event capacity must be greater than 0".to_string());
        }

        if self.event_capacity > MAX_EVENT_CAPACITY {
            return Err(format!(
                "Event capacity must not exceed {}, got: {}",
                MAX_EVENT_CAPACITY, self.event_capacity
            ));
        }

        if self.operation_timeout_ms == Some(0) {
            return Err("Operation timeout must be greater than 0 when set".to_string());
        }

        Ok(())
    }
}

impl Validate for NotificationConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating notification configuration");

        let Some(raw) = self.webhook_url.as_deref() else {
            return Ok(());
        };

        let url = Url::parse(raw).map_err(|e| format!("Invalid webhook URL '{}': {}", raw, e))?;
        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(format!(
                    "Webhook URL must use http:// or https:// scheme, got: {}",
                    scheme
                ));
            }
        }

        if self.timeout_seconds == 0 {
            return Err("Webhook timeout must be greater than 0".to_string());
        }

        for name in self.headers.keys() {
            if name.trim().is_empty() {
                return Err("Webhook header names cannot be empty".to_string());
            }
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
