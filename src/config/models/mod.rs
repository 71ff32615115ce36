//! Configuration data models
//!
//! This module defines all configuration structures used by the crate.

#![allow(missing_docs)]

pub mod batch;
pub mod logging;
pub mod notifications;

pub use batch::*;
pub use logging::*;
pub use notifications::*;

/// Default settle delay before a terminal status reverts to idle
pub fn default_settle_delay_ms() -> u64 {
    2000
}

/// Default capacity of the status change feed
pub fn default_event_capacity() -> usize {
    256
}

/// Largest accepted capacity of the status change feed
pub const MAX_EVENT_CAPACITY: usize = 1 << 16;

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

pub fn default_true() -> bool {
    true
}
