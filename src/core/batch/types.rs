//! Batch result types

use crate::utils::error::OpsError;
use std::time::Duration;

/// Failure of one operation in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationError {
    /// Human readable detail, forwarded to the notification surface
    pub message: String,
    /// Machine readable code, if the collaborator supplied one
    pub code: Option<String>,
}

impl OperationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub(crate) fn timeout(key: &str, limit: Duration) -> Self {
        Self::new(format!("Operation for {} timed out after {:?}", key, limit))
            .with_code("timeout")
    }

    pub(crate) fn panicked(key: &str) -> Self {
        Self::new(format!("Operation for {} panicked", key)).with_code("panic")
    }
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for OperationError {}

impl From<String> for OperationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for OperationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<OpsError> for OperationError {
    fn from(err: OpsError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<reqwest::Error> for OperationError {
    fn from(err: reqwest::Error) -> Self {
        let error = Self::new(err.to_string());
        match err.status() {
            Some(status) => error.with_code(status.as_str().to_string()),
            None => error,
        }
    }
}

/// Result of an individual operation in a batch
#[derive(Debug, Clone)]
pub struct BatchItemResult<K, T> {
    /// Key the operation was launched for
    pub key: K,
    pub result: std::result::Result<T, OperationError>,
    /// Time from dispatch to settle
    pub duration: Duration,
}

/// Summary of batch execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub batch_id: String,
    /// Status field the batch wrote to
    pub field: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub total_duration: Duration,
}

/// Everything a batch produced, in input key order
#[derive(Debug, Clone)]
pub struct BatchOutcome<K, T> {
    pub summary: BatchSummary,
    pub items: Vec<BatchItemResult<K, T>>,
}

impl<K, T> BatchOutcome<K, T> {
    pub fn all_succeeded(&self) -> bool {
        self.summary.failed == 0
    }

    /// Failed items with their errors
    pub fn failures(&self) -> impl Iterator<Item = (&K, &OperationError)> {
        self.items
            .iter()
            .filter_map(|item| item.result.as_ref().err().map(|err| (&item.key, err)))
    }
}
