//! Common test utilities for thalia-ops
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{fixtures::FakeLibraryApi, assertions::StatusAssertions};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let api = FakeLibraryApi::new().failing("OL2W", "no releases");
//!     // ...
//! }
//! ```

pub mod assertions;

pub use assertions::StatusAssertions;
pub use fixtures::{BookFactory, FakeLibraryApi, RecordingSink};
