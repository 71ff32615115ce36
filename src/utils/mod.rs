//! Utility modules for thalia-ops
//!
//! - **error**: crate error type and result alias
//! - **format**: size and name display helpers
//! - **logging**: tracing subscriber setup

pub mod error;
pub mod format;
pub mod logging;

pub use error::{OpsError, Result};
pub use format::{SizeInput, format_size, initials};
pub use logging::{LogLevel, init_logging};
