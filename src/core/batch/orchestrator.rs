//! Batch orchestrator
//!
//! Launches one operation per key, records each key's outcome in the shared
//! [`StatusRegistry`] and later reverts every slot to idle.

use super::scheduler::{TaskScheduler, TokioScheduler};
use super::types::{BatchItemResult, BatchOutcome, BatchSummary, OperationError};
use crate::config::{BatchConfig, Config, ResetPolicy};
use crate::core::notifications::{Notification, NotificationSink, build_notifier};
use crate::core::status::{SlotStatus, StatusRegistry};
use crate::utils::error::Result;
use futures::FutureExt;
use futures::future::join_all;
use std::collections::HashSet;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Runs batches of per-key operations against a shared status registry
///
/// Per key and field the registry always moves `Pending → Succeeded|Failed →
/// Idle`. A batch never fails as a whole: failures are confined to their own
/// slot and reported through the notification sink.
///
/// # Example
/// ```rust,ignore
/// use thalia_ops::core::batch::BatchOrchestrator;
///
/// let orchestrator = BatchOrchestrator::from_config(&config)?;
/// let outcome = orchestrator
///     .run(book_keys, "search", |key| async move {
///         client.search_book(&key).await
///     })
///     .await;
/// ```
#[derive(Debug, Clone)]
pub struct BatchOrchestrator {
    registry: Arc<StatusRegistry>,
    notifier: Arc<dyn NotificationSink>,
    scheduler: Arc<dyn TaskScheduler>,
    config: BatchConfig,
}

impl BatchOrchestrator {
    /// Create an orchestrator from its collaborators
    pub fn new(
        registry: Arc<StatusRegistry>,
        notifier: Arc<dyn NotificationSink>,
        scheduler: Arc<dyn TaskScheduler>,
        config: BatchConfig,
    ) -> Self {
        Self {
            registry,
            notifier,
            scheduler,
            config,
        }
    }

    /// Create an orchestrator scheduling on the caller's tokio runtime
    ///
    /// The runtime is captured here, so resets and notifications keep firing
    /// on it even when a later batch is driven from another executor. Called
    /// with no runtime entered, scheduling falls back to whichever runtime is
    /// current when each task is queued.
    pub fn with_tokio(
        registry: Arc<StatusRegistry>,
        notifier: Arc<dyn NotificationSink>,
        config: BatchConfig,
    ) -> Self {
        Self::new(
            registry,
            notifier,
            Arc::new(TokioScheduler::current()),
            config,
        )
    }

    /// Create an orchestrator, its registry and its notifier from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let registry = Arc::new(StatusRegistry::with_event_capacity(
            config.batch.event_capacity,
        ));
        let notifier = build_notifier(&config.notifications)?;
        Ok(Self::with_tokio(registry, notifier, config.batch.clone()))
    }

    pub fn registry(&self) -> &Arc<StatusRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Run a batch with the configured settle delay
    pub async fn run<K, T, E, F, Fut>(
        &self,
        keys: impl IntoIterator<Item = K>,
        field: &str,
        factory: F,
    ) -> BatchOutcome<K, T>
    where
        K: AsRef<str> + Clone,
        F: Fn(K) -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Into<OperationError>,
    {
        self.run_with_settle_delay(keys, field, self.config.settle_delay(), factory)
            .await
    }

    /// Run a batch of operations, one per unique key
    ///
    /// Every slot is marked pending before the factory is called for any key.
    /// Operations then run concurrently and each key's terminal status is
    /// written as soon as its own operation settles. The returned future
    /// completes once every key has a terminal status; the resets to idle
    /// fire `settle_delay` later on the scheduler.
    pub async fn run_with_settle_delay<K, T, E, F, Fut>(
        &self,
        keys: impl IntoIterator<Item = K>,
        field: &str,
        settle_delay: Duration,
        factory: F,
    ) -> BatchOutcome<K, T>
    where
        K: AsRef<str> + Clone,
        F: Fn(K) -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Into<OperationError>,
    {
        let batch_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        let keys = unique_keys(keys);

        info!(
            "Starting batch {} on field '{}' for {} keys",
            batch_id,
            field,
            keys.len()
        );

        let generations: Vec<u64> = keys
            .iter()
            .map(|key| self.registry.begin(key.as_ref(), field))
            .collect();

        let settles = keys
            .into_iter()
            .zip(generations)
            .map(|(key, generation)| {
                let operation = factory(key.clone());
                self.settle(key, field, generation, settle_delay, operation)
            })
            .collect::<Vec<_>>();

        let items = join_all(settles).await;

        let total = items.len();
        let succeeded = items.iter().filter(|item| item.result.is_ok()).count();
        let summary = BatchSummary {
            batch_id,
            field: field.to_string(),
            total,
            succeeded,
            failed: total - succeeded,
            total_duration: started.elapsed(),
        };

        info!(
            "Batch {} on field '{}' settled: {} succeeded, {} failed in {:?}",
            summary.batch_id,
            summary.field,
            summary.succeeded,
            summary.failed,
            summary.total_duration
        );

        BatchOutcome { summary, items }
    }

    async fn settle<K, T, E, Fut>(
        &self,
        key: K,
        field: &str,
        generation: u64,
        settle_delay: Duration,
        operation: Fut,
    ) -> BatchItemResult<K, T>
    where
        K: AsRef<str>,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Into<OperationError>,
    {
        let started = Instant::now();
        let result = self.drive(key.as_ref(), operation).await;

        match &result {
            Ok(_) => self.write(key.as_ref(), field, generation, SlotStatus::Succeeded),
            Err(err) => {
                warn!(
                    "Operation for {} on field '{}' failed: {}",
                    key.as_ref(),
                    field,
                    err
                );
                self.write(key.as_ref(), field, generation, SlotStatus::Failed);
                self.notify_failure(key.as_ref(), field, err);
            }
        }

        self.schedule_reset(key.as_ref(), field, generation, settle_delay);

        BatchItemResult {
            key,
            result,
            duration: started.elapsed(),
        }
    }

    async fn drive<T, E, Fut>(
        &self,
        key: &str,
        operation: Fut,
    ) -> std::result::Result<T, OperationError>
    where
        Fut: Future<Output = std::result::Result<T, E>>,
        E: Into<OperationError>,
    {
        let guarded = AssertUnwindSafe(operation).catch_unwind();

        let outcome = match self.config.operation_timeout() {
            Some(limit) => match tokio::time::timeout(limit, guarded).await {
                Ok(outcome) => outcome,
                Err(_) => return Err(OperationError::timeout(key, limit)),
            },
            None => guarded.await,
        };

        match outcome {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(OperationError::panicked(key)),
        }
    }

    fn write(&self, key: &str, field: &str, generation: u64, status: SlotStatus) {
        apply(
            &self.registry,
            self.config.reset_policy,
            key,
            field,
            generation,
            status,
        );
    }

    fn notify_failure(&self, key: &str, field: &str, err: &OperationError) {
        let notifier = Arc::clone(&self.notifier);
        let notification = Notification::operation_failed(key, field, err.message.clone());

        self.scheduler.spawn(Box::pin(async move {
            let sent = AssertUnwindSafe(notifier.send(&notification))
                .catch_unwind()
                .await;
            match sent {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!(
                    "Dropped failure notification via {}: {}",
                    notifier.name(),
                    e
                ),
                Err(_) => warn!(
                    "Dropped failure notification via {}: sink panicked",
                    notifier.name()
                ),
            }
        }));
    }

    fn schedule_reset(&self, key: &str, field: &str, generation: u64, delay: Duration) {
        let registry = Arc::clone(&self.registry);
        let policy = self.config.reset_policy;
        let key = key.to_string();
        let field = field.to_string();

        self.scheduler.schedule_after(
            delay,
            Box::pin(async move {
                apply(&registry, policy, &key, &field, generation, SlotStatus::Idle);
            }),
        );
    }
}

fn apply(
    registry: &StatusRegistry,
    policy: ResetPolicy,
    key: &str,
    field: &str,
    generation: u64,
    status: SlotStatus,
) {
    match policy {
        ResetPolicy::Always => registry.set(key, field, status),
        ResetPolicy::SkipIfSuperseded => {
            registry.set_if_current(key, field, generation, status);
        }
    }
}

fn unique_keys<K: AsRef<str>>(keys: impl IntoIterator<Item = K>) -> Vec<K> {
    let mut seen = HashSet::new();
    keys.into_iter()
        .filter(|key| {
            let fresh = seen.insert(key.as_ref().to_string());
            if !fresh {
                debug!("Ignoring duplicate batch key {}", key.as_ref());
            }
            fresh
        })
        .collect()
}
