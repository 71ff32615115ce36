//! Batch orchestration configuration

use super::*;
use crate::utils::error::OpsError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What happens to a slot write whose batch has been superseded
///
/// A batch supersedes another when it marks the same key+field pending
/// before the older batch's terminal write or reset has landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Every terminal write and reset applies, even over a newer batch's state
    #[default]
    Always,
    /// Writes from a superseded batch are dropped
    SkipIfSuperseded,
}

impl std::str::FromStr for ResetPolicy {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "always" => Ok(ResetPolicy::Always),
            "skip_if_superseded" => Ok(ResetPolicy::SkipIfSuperseded),
            other => Err(OpsError::config(format!("Invalid reset policy: {}", other))),
        }
    }
}

/// Batch orchestration configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Delay after a terminal status before the slot reverts to idle
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Per-operation timeout; operations run unbounded when unset
    #[serde(default)]
    pub operation_timeout_ms: Option<u64>,
    /// Handling of writes from superseded batches
    #[serde(default)]
    pub reset_policy: ResetPolicy,
    /// Buffered status change events per subscriber
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: default_settle_delay_ms(),
            operation_timeout_ms: None,
            reset_policy: ResetPolicy::default(),
            event_capacity: default_event_capacity(),
        }
    }
}

impl BatchConfig {
    /// Create a new config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the settle delay
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Set the per-operation timeout
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout_ms = Some(timeout.as_millis() as u64);
        self
    }

    /// Set the reset policy
    pub fn with_reset_policy(mut self, policy: ResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    /// Set the change feed capacity
    pub fn with_event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.clamp(1, MAX_EVENT_CAPACITY);
        self
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn operation_timeout(&self) -> Option<Duration> {
        self.operation_timeout_ms.map(Duration::from_millis)
    }

    /// Merge batch configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.settle_delay_ms != default_settle_delay_ms() {
            self.settle_delay_ms = other.settle_delay_ms;
        }
        if other.operation_timeout_ms.is_some() {
            self.operation_timeout_ms = other.operation_timeout_ms;
        }
        if other.reset_policy != ResetPolicy::default() {
            self.reset_policy = other.reset_policy;
        }
        if other.event_capacity != default_event_capacity() {
            self.event_capacity = other.event_capacity;
        }
        self
    }
}
