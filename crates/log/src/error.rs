//! Error handling for stencil-log

use thiserror::Error;

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Errors from setting up logging.
#[derive(Debug, Error)]
pub enum LogError {
    /// The level filter could not be parsed.
    #[error("invalid filter '{filter}': {reason}")]
    Filter {
        /// The directive string as configured.
        filter: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}
