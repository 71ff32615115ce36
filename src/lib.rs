//! # thalia-ops
//!
//! Batch operation orchestration and rename previews for the Thalia library
//! manager.
//!
//! ## Features
//!
//! - **Batch orchestration**: launch one asynchronous operation per entity key,
//!   track each key's progress on a named status field and revert it to idle
//!   after a settle delay
//! - **Shared status registry**: key → field → status store with a change feed
//!   for reactive presentation layers
//! - **Failure notifications**: log, in-process channel and webhook sinks
//! - **Rename previews**: minimal prefix/suffix diffs rendered as escaped markup
//! - **Formatters**: byte sizes and name initials
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use thalia_ops::core::batch::{BatchConfig, BatchOrchestrator, OperationError};
//! use thalia_ops::core::notifications::LogNotifier;
//! use thalia_ops::core::status::StatusRegistry;
//!
//! #[tokio::main]
//! async fn main() {
//!     let registry = Arc::new(StatusRegistry::new());
//!     let orchestrator = BatchOrchestrator::with_tokio(
//!         registry.clone(),
//!         Arc::new(LogNotifier),
//!         BatchConfig::default(),
//!     );
//!
//!     let outcome = orchestrator
//!         .run(["OL1W", "OL2W"], "search", |key| async move {
//!             if key == "OL2W" {
//!                 return Err(OperationError::new("no releases found"));
//!             }
//!             Ok(())
//!         })
//!         .await;
//!
//!     println!(
//!         "{} of {} searches succeeded",
//!         outcome.summary.succeeded, outcome.summary.total
//!     );
//!     println!("OL2W shows {:?}", registry.tag("OL2W", "search"));
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

pub use config::Config;
pub use utils::error::{OpsError, Result};

pub use core::batch::{
    BatchConfig, BatchOrchestrator, BatchOutcome, BatchSummary, ManualScheduler, OperationError,
    ResetPolicy, TaskScheduler, TokioScheduler,
};
pub use core::diff::{
    DiffStyle, PathDiff, RenamePreview, RenderedDiff, diff_paths, render_path_diff,
};
pub use core::notifications::{Notification, NotificationSink, build_notifier};
pub use core::status::{SlotStatus, StatusChange, StatusRegistry};
pub use utils::format::{format_size, initials};
