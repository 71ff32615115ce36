//! Notification surface configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Notification configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Deliver failure notifications at all
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Webhook receiving failure notifications; logged only when unset
    #[serde(default)]
    pub webhook_url: Option<String>,
    /// Webhook request timeout
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Extra HTTP headers sent with each webhook request
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            webhook_url: None,
            timeout_seconds: default_timeout(),
            headers: HashMap::new(),
        }
    }
}

impl NotificationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Merge notification configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.enabled {
            self.enabled = other.enabled;
        }
        if other.webhook_url.is_some() {
            self.webhook_url = other.webhook_url;
        }
        if other.timeout_seconds != default_timeout() {
            self.timeout_seconds = other.timeout_seconds;
        }
        self.headers.extend(other.headers);
        self
    }
}
