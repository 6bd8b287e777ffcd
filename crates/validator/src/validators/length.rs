//! String length validators
//!
//! Length is measured in Unicode scalar values (chars). Non-string inputs
//! pass through untouched.

use serde_json::Value;

use crate::foundation::ValidationError;

#[inline]
fn char_len(input: &str) -> usize {
    input.chars().count()
}

crate::validator! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize } for Value;
    rule(self, input) { input.as_str().is_none_or(|s| char_len(s) >= self.min) }
    error(self, input) {
        let actual = input.as_str().map_or(0, char_len);
        ValidationError::new("min_length", format!("Must be at least {} characters", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", actual.to_string())
    }
    fn min_length(min: usize);
}

crate::validator! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize } for Value;
    rule(self, input) { input.as_str().is_none_or(|s| char_len(s) <= self.max) }
    error(self, input) {
        let actual = input.as_str().map_or(0, char_len);
        ValidationError::new("max_length", format!("Must be at most {} characters", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", actual.to_string())
    }
    fn max_length(max: usize);
}

crate::validator! {
    /// Validates that a string has an exact length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactLength { length: usize } for Value;
    rule(self, input) { input.as_str().is_none_or(|s| char_len(s) == self.length) }
    error(self, input) {
        let actual = input.as_str().map_or(0, char_len);
        ValidationError::new("exact_length", format!("Must be exactly {} characters", self.length))
            .with_param("length", self.length.to_string())
            .with_param("actual", actual.to_string())
    }
    fn exact_length(length: usize);
}
