//! String content validators

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::foundation::ValidationError;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

// ============================================================================
// REGEX VALIDATOR
// ============================================================================

crate::validator! {
    /// Validates that a string matches a regular expression.
    pub Matches { pattern: Regex } for Value;
    rule(self, input) { input.as_str().is_none_or(|s| self.pattern.is_match(s)) }
    error(self, input) {
        ValidationError::new(
            "matches",
            format!("Must match the pattern \"{}\"", self.pattern.as_str()),
        )
        .with_param("pattern", self.pattern.as_str().to_owned())
    }
    fn matches(pattern: Regex);
}

// ============================================================================
// FORMATS
// ============================================================================

crate::validator! {
    /// Validates email format.
    pub Email for Value;
    rule(input) { input.as_str().is_none_or(|s| EMAIL_REGEX.is_match(s)) }
    error(input) { ValidationError::invalid_format("email") }
    fn email();
}

crate::validator! {
    /// Validates URL format.
    pub Url for Value;
    rule(input) { input.as_str().is_none_or(|s| URL_REGEX.is_match(s)) }
    error(input) { ValidationError::invalid_format("url") }
    fn url();
}

crate::validator! {
    /// Validates that a string is lowercase.
    pub Lowercase for Value;
    rule(input) {
        input.as_str().is_none_or(|s| s.chars().all(|c| !c.is_alphabetic() || c.is_lowercase()))
    }
    error(input) { ValidationError::new("lowercase", "String must be lowercase") }
    fn lowercase();
}

crate::validator! {
    /// Validates that a string is uppercase.
    pub Uppercase for Value;
    rule(input) {
        input.as_str().is_none_or(|s| s.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()))
    }
    error(input) { ValidationError::new("uppercase", "String must be uppercase") }
    fn uppercase();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_matches() {
        let validator = matches(Regex::new(r"^\d{3}-\d{4}$").unwrap());
        assert!(validator.validate(&json!("555-1234")).is_ok());
        let err = validator.validate(&json!("5551234")).unwrap_err();
        assert_eq!(err.code, "matches");
        assert_eq!(err.param("pattern"), Some(r"^\d{3}-\d{4}$"));
    }

    #[test]
    fn test_email() {
        assert!(email().validate(&json!("user@example.com")).is_ok());
        assert!(email().validate(&json!("not-an-email")).is_err());
    }

    #[test]
    fn test_url() {
        assert!(url().validate(&json!("https://example.com/a")).is_ok());
        assert!(url().validate(&json!("example.com")).is_err());
    }

    #[test]
    fn test_case() {
        assert!(lowercase().validate(&json!("abc-1")).is_ok());
        assert!(lowercase().validate(&json!("Abc")).is_err());
        assert!(uppercase().validate(&json!("ABC")).is_ok());
    }
}
