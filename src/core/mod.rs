//! Core functionality
//!
//! - **batch**: batch orchestration and task scheduling
//! - **diff**: rename preview diffs
//! - **notifications**: failure notification sinks
//! - **status**: shared per-key, per-field status registry

pub mod batch;
pub mod diff;
pub mod notifications;
pub mod status;
