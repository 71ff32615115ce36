//! Integration tests for thalia-ops
//!
//! These tests drive the public API end to end against simulated
//! collaborators.

pub mod batch_flow_tests;
pub mod config_tests;
pub mod notification_tests;
pub mod rename_preview_tests;
