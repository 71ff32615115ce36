//! Custom test assertions
//!
//! Provides status registry assertions for batch tests.

use thalia_ops::core::status::{SlotStatus, StatusRegistry};

/// Assertions for StatusRegistry
pub trait StatusAssertions {
    /// Assert one slot holds `expected`
    fn assert_slot(&self, key: &str, field: &str, expected: SlotStatus);

    /// Assert every key's slot on `field` holds `expected`
    fn assert_all<I>(&self, keys: I, field: &str, expected: SlotStatus)
    where
        I: IntoIterator,
        I::Item: AsRef<str>;
}

impl StatusAssertions for StatusRegistry {
    fn assert_slot(&self, key: &str, field: &str, expected: SlotStatus) {
        assert_eq!(
            self.get(key, field),
            Some(expected),
            "Expected {}/{} to be {:?}",
            key,
            field,
            expected
        );
    }

    fn assert_all<I>(&self, keys: I, field: &str, expected: SlotStatus)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for key in keys {
            self.assert_slot(key.as_ref(), field, expected);
        }
    }
}
