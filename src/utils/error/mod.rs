//! Error handling for thalia-ops
//!
//! This module defines the crate-wide error type and its helpers.

#![allow(missing_docs)]

mod helpers;
mod types;

pub use types::{OpsError, Result};
