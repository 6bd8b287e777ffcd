//! Core validation types and traits
//!
//! - **Traits**: [`Validate`], [`ValueRule`]
//! - **Errors**: [`ValidationError`], [`ValidationErrors`]

pub mod error;
pub mod traits;

pub use error::{ValidationError, ValidationErrors, json_type_name};
pub use traits::{Validate, ValueRule};

/// A validation result using the standard `ValidationError`.
pub type ValidationResult<T> = Result<T, ValidationError>;
