//! Core traits for the validation system
//!
//! Every rule attached to a [`Schema`](crate::schema::Schema) implements
//! [`Validate`] over `serde_json::Value`. Rules never see missing values:
//! presence, nullability and type checks are handled by the schema before
//! its rules run.

use std::fmt;

use serde_json::Value;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The core trait that all validators implement.
///
/// # Examples
///
/// ```
/// use stencil_validator::foundation::{Validate, ValidationError};
///
/// struct NonZero;
///
/// impl Validate for NonZero {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if *input == 0 {
///             Err(ValidationError::new("non_zero", "Must not be zero"))
///         } else {
///             Ok(())
///         }
///     }
/// }
///
/// assert!(NonZero.validate(&3).is_ok());
/// assert!(NonZero.validate(&0).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Returns the name of this validator.
    ///
    /// Used by schema introspection and diagnostics.
    fn name(&self) -> &str {
        let full = std::any::type_name::<Self>();
        let base = full.split('<').next().unwrap_or(full);
        base.rsplit("::").next().unwrap_or(base)
    }
}

// ============================================================================
// OBJECT-SAFE VALUE RULE
// ============================================================================

/// A thread-safe, debuggable validator over JSON values.
///
/// Blanket-implemented for every `Validate<Input = Value>` so schemas can
/// hold heterogeneous rules behind one `Arc<dyn ValueRule>`.
pub trait ValueRule: Validate<Input = Value> + fmt::Debug + Send + Sync {}

impl<T> ValueRule for T where T: Validate<Input = Value> + fmt::Debug + Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct AlwaysFails;

    impl Validate for AlwaysFails {
        type Input = Value;

        fn validate(&self, _input: &Value) -> Result<(), ValidationError> {
            Err(ValidationError::new("always_fails", "Always fails"))
        }
    }

    #[test]
    fn test_default_name_is_short_type_name() {
        assert_eq!(AlwaysFails.name(), "AlwaysFails");
    }

    #[test]
    fn test_value_rule_is_object_safe() {
        let rule: std::sync::Arc<dyn ValueRule> = std::sync::Arc::new(AlwaysFails);
        assert!(rule.validate(&Value::Null).is_err());
        assert_eq!(rule.name(), "AlwaysFails");
    }
}
