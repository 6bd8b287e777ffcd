//! Array size validators

use serde_json::Value;

use crate::foundation::ValidationError;

crate::validator! {
    /// Validates that an array has at least `min` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinSize { min: usize } for Value;
    rule(self, input) { input.as_array().is_none_or(|a| a.len() >= self.min) }
    error(self, input) {
        let actual = input.as_array().map_or(0, Vec::len);
        ValidationError::new("min_size", format!("Must have at least {} elements", self.min))
            .with_param("min", self.min.to_string())
            .with_param("actual", actual.to_string())
    }
    fn min_size(min: usize);
}

crate::validator! {
    /// Validates that an array has at most `max` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxSize { max: usize } for Value;
    rule(self, input) { input.as_array().is_none_or(|a| a.len() <= self.max) }
    error(self, input) {
        let actual = input.as_array().map_or(0, Vec::len);
        ValidationError::new("max_size", format!("Must have at most {} elements", self.max))
            .with_param("max", self.max.to_string())
            .with_param("actual", actual.to_string())
    }
    fn max_size(max: usize);
}

crate::validator! {
    /// Validates that an array has exactly `size` elements.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub ExactSize { size: usize } for Value;
    rule(self, input) { input.as_array().is_none_or(|a| a.len() == self.size) }
    error(self, input) {
        let actual = input.as_array().map_or(0, Vec::len);
        ValidationError::new("exact_size", format!("Must have exactly {} elements", self.size))
            .with_param("size", self.size.to_string())
            .with_param("actual", actual.to_string())
    }
    fn exact_size(size: usize);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_min_size() {
        assert!(min_size(2).validate(&json!([1, 2, 3])).is_ok());
        assert!(min_size(3).validate(&json!([1])).is_err());
    }

    #[test]
    fn test_max_size() {
        assert!(max_size(3).validate(&json!([1, 2])).is_ok());
        assert!(max_size(2).validate(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_exact_size() {
        assert!(exact_size(0).validate(&json!([])).is_ok());
        assert!(exact_size(1).validate(&json!([])).is_err());
    }
}
