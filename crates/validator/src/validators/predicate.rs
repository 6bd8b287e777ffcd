//! Named predicate validator for custom builders.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::{Validate, ValidationError};

type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Validates a value with an arbitrary predicate.
///
/// Custom builders registered with the compiler use this to attach checks
/// the built-in rules cannot express.
///
/// # Examples
///
/// ```
/// use stencil_validator::validators::Predicate;
/// use stencil_validator::foundation::Validate;
/// use serde_json::json;
///
/// let even = Predicate::new("even", "Must be even", |v| {
///     v.as_i64().is_some_and(|n| n % 2 == 0)
/// });
/// assert!(even.validate(&json!(4)).is_ok());
/// assert!(even.validate(&json!(3)).is_err());
/// ```
#[derive(Clone)]
pub struct Predicate {
    name: String,
    message: String,
    test: Arc<PredicateFn>,
}

impl Predicate {
    /// Creates a predicate validator; `name` becomes the error code.
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        test: impl Fn(&Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            test: Arc::new(test),
        }
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

impl Validate for Predicate {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        if (self.test)(input) {
            Ok(())
        } else {
            Err(ValidationError::new(self.name.clone(), self.message.clone()))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_predicate_uses_name_as_code() {
        let p = Predicate::new("slug", "Must be a slug", |v| {
            v.as_str().is_some_and(|s| !s.contains(' '))
        });
        assert_eq!(p.name(), "slug");
        let err = p.validate(&json!("a b")).unwrap_err();
        assert_eq!(err.code, "slug");
        assert_eq!(err.message, "Must be a slug");
    }
}
