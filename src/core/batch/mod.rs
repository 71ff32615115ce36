//! Batch orchestration with per-key status tracking
//!
//! A batch launches one independent asynchronous operation per entity key
//! and reflects each key's progress on a named status field in the shared
//! [`StatusRegistry`](crate::core::status::StatusRegistry).

mod orchestrator;
pub mod scheduler;
mod types;

pub use crate::config::{BatchConfig, ResetPolicy};
pub use orchestrator::BatchOrchestrator;
pub use scheduler::{ManualScheduler, ScheduledTask, TaskScheduler, TokioScheduler};
pub use types::{BatchItemResult, BatchOutcome, BatchSummary, OperationError};
