//! Helper functions for creating specific error types

use super::types::OpsError;

impl OpsError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn notification<S: Into<String>>(message: S) -> Self {
        Self::Notification(message.into())
    }

    pub fn logging<S: Into<String>>(message: S) -> Self {
        Self::Logging(message.into())
    }
}
