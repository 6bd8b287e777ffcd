//! MESSAGE combinator - custom error messages

use std::borrow::Cow;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// WITH MESSAGE COMBINATOR
// ============================================================================

/// Replaces the error message of a validator.
///
/// Schema builders wrap a rule in `WithMessage` whenever the schema author
/// supplied a trailing message argument (`["stencil.min", 4, "too short"]`).
/// The original error is kept as a nested error so its params survive.
///
/// # Examples
///
/// ```
/// use stencil_validator::combinators::WithMessage;
/// use stencil_validator::foundation::Validate;
/// use stencil_validator::validators::min_length;
/// use serde_json::json;
///
/// let validator = WithMessage::new(min_length(8), "Password must be at least 8 characters");
///
/// let err = validator.validate(&json!("short")).unwrap_err();
/// assert_eq!(err.message, "Password must be at least 8 characters");
/// assert_eq!(err.code, "min_length");
/// ```
#[derive(Debug, Clone)]
pub struct WithMessage<V> {
    inner: V,
    message: String,
}

impl<V> WithMessage<V> {
    /// Creates a new WithMessage combinator with a custom message.
    pub fn new(inner: V, message: impl Into<String>) -> Self {
        Self {
            inner,
            message: message.into(),
        }
    }

    /// Returns a reference to the inner validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Returns the custom message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl<V> Validate for WithMessage<V>
where
    V: Validate,
{
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        self.inner.validate(input).map_err(|original| {
            let mut error =
                ValidationError::new(original.code.clone(), Cow::Owned(self.message.clone()));
            error.params.clone_from(&original.params);
            error.with_nested_error(original)
        })
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Creates a WithMessage combinator.
pub fn with_message<V>(validator: V, message: impl Into<String>) -> WithMessage<V> {
    WithMessage::new(validator, message)
}

// ============================================================================
// TESTS
// ============================================================================
