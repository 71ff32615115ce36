//! Failure notification surface
//!
//! Batches push a [`Notification`] for every failed operation. Sinks are
//! side-effect only: the orchestrator never waits on them and swallows their
//! errors.

mod channels;
mod types;

pub use channels::{
    ChannelNotifier, LogNotifier, NotificationSink, NullNotifier, WebhookNotifier, build_notifier,
};
pub use types::{Notification, NotificationSeverity};
