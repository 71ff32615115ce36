//! Per-key, per-field status tracking
//!
//! The registry is the surface through which batch outcomes are observed.
//! Each entity key owns any number of named fields, and each field holds one
//! [`SlotStatus`].

mod registry;
mod types;

pub use registry::StatusRegistry;
pub use types::{SlotStatus, StatusChange};
