//! Notification types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationSeverity {
    Info,
    Warning,
    Error,
}

/// A message for the notification surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    /// Human readable detail, shown as the notification body
    pub message: String,
    pub severity: NotificationSeverity,
    /// Entity key the notification is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Status field the notification is about
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(
        severity: NotificationSeverity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            severity,
            key: None,
            field: None,
            timestamp: Utc::now(),
        }
    }

    /// Notification for one failed batch operation
    pub fn operation_failed(key: &str, field: &str, detail: impl Into<String>) -> Self {
        Self::new(NotificationSeverity::Error, "Error", detail).with_target(key, field)
    }

    /// Attach the key+field slot the notification refers to
    pub fn with_target(mut self, key: impl Into<String>, field: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self.field = Some(field.into());
        self
    }
}
