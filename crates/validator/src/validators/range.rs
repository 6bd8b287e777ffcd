//! Numeric range validators
//!
//! Bounds are inclusive unless the name says otherwise. Non-numeric inputs
//! pass through untouched; the owning schema reports type mismatches.

use serde_json::Value;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that a number is at least a minimum.
    #[derive(Copy, PartialEq)]
    pub Min { min: f64 } for Value;
    rule(self, input) { input.as_f64().is_none_or(|n| n >= self.min) }
    error(self, input) {
        ValidationError::new("min", format!("Value must be at least {}", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", input.to_string())
    }
    fn min(min: f64);
}

crate::validator! {
    /// Validates that a number does not exceed a maximum.
    #[derive(Copy, PartialEq)]
    pub Max { max: f64 } for Value;
    rule(self, input) { input.as_f64().is_none_or(|n| n <= self.max) }
    error(self, input) {
        ValidationError::new("max", format!("Value must be at most {}", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", input.to_string())
    }
    fn max(max: f64);
}

crate::validator! {
    /// Validates that a number is strictly greater than a threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use stencil_validator::validators::more_than;
    /// use stencil_validator::foundation::Validate;
    /// use serde_json::json;
    ///
    /// let validator = more_than(5.0);
    /// assert!(validator.validate(&json!(6)).is_ok());
    /// assert!(validator.validate(&json!(5)).is_err());
    /// ```
    #[derive(Copy, PartialEq)]
    pub MoreThan { bound: f64 } for Value;
    rule(self, input) { input.as_f64().is_none_or(|n| n > self.bound) }
    error(self, input) {
        ValidationError::new("more_than", format!("Value must be greater than {}", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn more_than(bound: f64);
}

crate::validator! {
    /// Validates that a number is strictly less than a threshold.
    #[derive(Copy, PartialEq)]
    pub LessThan { bound: f64 } for Value;
    rule(self, input) { input.as_f64().is_none_or(|n| n < self.bound) }
    error(self, input) {
        ValidationError::new("less_than", format!("Value must be less than {}", self.bound))
            .with_param("bound", self.bound.to_string())
            .with_param("actual", input.to_string())
    }
    fn less_than(bound: f64);
}

crate::validator! {
    /// Validates that a number has no fractional part.
    pub Integer for Value;
    rule(input) { input.as_f64().is_none_or(|n| n.fract() == 0.0) }
    error(input) {
        ValidationError::new("integer", "Value must be an integer")
            .with_param("actual", input.to_string())
    }
    fn integer();
}

// ============================================================================
// TESTS
// ============================================================================
