//! Error types and handling infrastructure for rotatext.
//!
//! This module provides a centralized error handling system using `thiserror` for
//! custom error types. Construction-time problems (a missing entry source, an
//! unparseable scroll distance) are fatal errors; an invalid rotation request at
//! runtime is deliberately *not* represented here: it is logged as a warning and
//! the operation becomes a no-op, so a bad tick only skips one cycle.

use thiserror::Error;

/// The main error type for rotatext operations.
#[derive(Error, Debug)]
pub enum RotatextError {
    /// No rotation content could be resolved at mount time: the container is
    /// missing the source attribute and no explicit entry list was given.
    #[error("no rotation entries: attribute `{attribute}` is absent and no explicit list was given")]
    MissingSource { attribute: String },

    /// A scroll distance string could not be parsed as a length.
    #[error("invalid scroll distance: `{value}`")]
    InvalidDistance { value: String },

    /// UI and terminal related errors
    #[error("UI operation failed: {message}")]
    UIError { message: String },

    /// Generic error for cases not covered by specific variants
    #[error("Operation failed: {message}")]
    Other { message: String },
}

/// Standard Result type for rotatext operations.
pub type Result<T> = std::result::Result<T, RotatextError>;

impl RotatextError {
    /// Create a MissingSource error naming the attribute that was consulted
    pub fn missing_source(attribute: impl Into<String>) -> Self {
        Self::MissingSource {
            attribute: attribute.into(),
        }
    }

    /// Create an InvalidDistance error carrying the offending input
    pub fn invalid_distance(value: impl Into<String>) -> Self {
        Self::InvalidDistance {
            value: value.into(),
        }
    }

    /// Create a UIError with a descriptive message
    pub fn ui(message: impl Into<String>) -> Self {
        Self::UIError {
            message: message.into(),
        }
    }

    /// Create a generic Other error with a descriptive message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

// Terminal setup and drawing surface io::Errors as UI failures
impl From<std::io::Error> for RotatextError {
    fn from(err: std::io::Error) -> Self {
        Self::UIError {
            message: err.to_string(),
        }
    }
}
