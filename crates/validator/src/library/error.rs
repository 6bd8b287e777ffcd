//! Builder errors.

use thiserror::Error;

/// Errors raised when a builder rejects its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("`{builder}` expects {expected} at argument {position}")]
    InvalidArgument {
        builder: String,
        position: usize,
        expected: String,
    },

    #[error("`{builder}` accepts at most {expected} argument(s), got {got}")]
    ArgumentCount {
        builder: String,
        expected: usize,
        got: usize,
    },

    #[error("{0}")]
    Custom(String),
}

impl BuildError {
    /// Creates a free-form error, for custom builders.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
