//! Notification sink implementations

use super::types::{Notification, NotificationSeverity};
use crate::config::NotificationConfig;
use crate::utils::error::{OpsError, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Notification sink trait
#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync + std::fmt::Debug {
    /// Deliver a notification
    async fn send(&self, notification: &Notification) -> Result<()>;

    /// Get sink name
    fn name(&self) -> &str;
}

/// Sink writing notifications to the tracing subscriber
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl NotificationSink for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        let key = notification.key.as_deref().unwrap_or("-");
        let field = notification.field.as_deref().unwrap_or("-");
        match notification.severity {
            NotificationSeverity::Info => info!(
                "{} [{}/{}]: {}",
                notification.title, key, field, notification.message
            ),
            NotificationSeverity::Warning => warn!(
                "{} [{}/{}]: {}",
                notification.title, key, field, notification.message
            ),
            NotificationSeverity::Error => error!(
                "{} [{}/{}]: {}",
                notification.title, key, field, notification.message
            ),
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "log"
    }
}

/// Sink that drops every notification
#[derive(Debug, Default, Clone)]
pub struct NullNotifier;

#[async_trait::async_trait]
impl NotificationSink for NullNotifier {
    async fn send(&self, _notification: &Notification) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

/// Sink forwarding notifications to an in-process consumer such as a toast queue
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelNotifier {
    /// Create a notifier and the receiver its notifications arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

#[async_trait::async_trait]
impl NotificationSink for ChannelNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        self.tx
            .send(notification.clone())
            .map_err(|_| OpsError::notification("Notification receiver has been dropped"))
    }

    fn name(&self) -> &str {
        "channel"
    }
}

/// Sink posting notifications as JSON to a webhook
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    client: Client,
    url: String,
    headers: HashMap<String, String>,
}

impl WebhookNotifier {
    /// Create a webhook notifier from configuration
    pub fn new(url: impl Into<String>, config: &NotificationConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                OpsError::notification(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url: url.into(),
            headers: config.headers.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl NotificationSink for WebhookNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        let mut request = self.client.post(&self.url).json(notification);
        for (name, value) in &self.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| {
            OpsError::notification(format!("Failed to deliver notification: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(OpsError::notification(format!(
                "Webhook returned status: {}",
                response.status()
            )));
        }

        debug!("Delivered notification {} to {}", notification.id, self.url);
        Ok(())
    }

    fn name(&self) -> &str {
        "webhook"
    }
}

/// Build the sink described by `config`
///
/// Disabled notifications map to [`NullNotifier`], a configured webhook to
/// [`WebhookNotifier`], and anything else to [`LogNotifier`].
pub fn build_notifier(config: &NotificationConfig) -> Result<Arc<dyn NotificationSink>> {
    if !config.enabled {
        info!("Failure notifications disabled");
        return Ok(Arc::new(NullNotifier));
    }

    match config.webhook_url.as_deref() {
        Some(url) => {
            info!("Sending failure notifications to webhook: {}", url);
            Ok(Arc::new(WebhookNotifier::new(url, config)?))
        }
        None => Ok(Arc::new(LogNotifier)),
    }
}
