//! Schema evaluation.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::{Allowed, Kind, KindTag, Membership, Schema};
use crate::foundation::{Validate, ValidationError, json_type_name};

type Parent<'a> = Option<&'a Map<String, Value>>;

impl Schema {
    /// Validates a present value.
    pub fn validate(&self, value: &Value) -> Result<(), ValidationError> {
        self.check(Some(value), None)
    }

    /// Validates a possibly missing value; `None` means "absent".
    pub fn validate_opt(&self, value: Option<&Value>) -> Result<(), ValidationError> {
        self.check(value, None)
    }

    /// Returns true if [`validate`](Self::validate) succeeds.
    #[must_use]
    pub fn is_valid(&self, value: &Value) -> bool {
        self.validate(value).is_ok()
    }

    /// Returns true if [`validate_opt`](Self::validate_opt) succeeds.
    #[must_use]
    pub fn is_valid_opt(&self, value: Option<&Value>) -> bool {
        self.validate_opt(value).is_ok()
    }

    fn check(&self, value: Option<&Value>, parent: Parent<'_>) -> Result<(), ValidationError> {
        let value = match value {
            None if self.required => return Err(self.required_error()),
            None => return Ok(()),
            Some(Value::Null) if self.required => return Err(self.required_error()),
            Some(Value::Null) if self.nullable => return Ok(()),
            Some(value) => value,
        };

        self.check_type(value)?;

        if self.required && self.tag() == KindTag::String && value.as_str() == Some("") {
            return Err(self.required_error());
        }

        if let Some(allowed) = &self.one_of {
            if !contains(allowed, value, parent) {
                return Err(self.decorate(membership_error("one_of", "Must be one of", allowed, parent)));
            }
        }
        if let Some(denied) = &self.not_one_of {
            if contains(denied, value, parent) {
                return Err(self.decorate(membership_error(
                    "not_one_of",
                    "Must not be one of",
                    denied,
                    parent,
                )));
            }
        }

        for rule in &self.rules {
            rule.validate(value).map_err(|e| self.decorate(e))?;
        }

        match &self.kind {
            Kind::Object(fields) if !fields.is_empty() => {
                let object = value.as_object();
                let errors: Vec<ValidationError> = fields
                    .iter()
                    .filter_map(|(key, field)| {
                        field
                            .check(object.and_then(|o| o.get(key)), object)
                            .err()
                            .map(|e| e.under(key))
                    })
                    .collect();
                if !errors.is_empty() {
                    return Err(self.decorate(
                        ValidationError::new("object", "Object validation failed").with_nested(errors),
                    ));
                }
            }
            Kind::Array(Some(element)) => {
                let errors: Vec<ValidationError> = value
                    .as_array()
                    .into_iter()
                    .flatten()
                    .enumerate()
                    .filter_map(|(i, item)| {
                        element.check(Some(item), parent).err().map(|e| e.under(&i.to_string()))
                    })
                    .collect();
                if !errors.is_empty() {
                    return Err(self.decorate(
                        ValidationError::new("array", "Array validation failed").with_nested(errors),
                    ));
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn check_type(&self, value: &Value) -> Result<(), ValidationError> {
        let matches = match self.tag() {
            KindTag::Mixed => true,
            KindTag::String => value.is_string(),
            KindTag::Number => value.is_number(),
            KindTag::Boolean => value.is_boolean(),
            KindTag::Object => value.is_object(),
            KindTag::Array => value.is_array(),
        };
        if matches {
            Ok(())
        } else {
            Err(self.decorate(ValidationError::type_mismatch(
                self.tag().as_str(),
                json_type_name(value),
            )))
        }
    }

    fn required_error(&self) -> ValidationError {
        let error = ValidationError::required();
        let error = match &self.required_message {
            Some(message) => ValidationError {
                message: Cow::Owned(message.clone()),
                ..error
            },
            None => error,
        };
        self.decorate(error)
    }

    fn decorate(&self, error: ValidationError) -> ValidationError {
        match &self.label {
            Some(label) if error.param("label").is_none() => error.with_param("label", label.clone()),
            _ => error,
        }
    }
}

fn resolve<'a>(entry: &'a Allowed, parent: Parent<'a>) -> Option<&'a Value> {
    match entry {
        Allowed::Value(value) => Some(value),
        Allowed::Ref(reference) => reference.resolve(parent),
    }
}

fn contains(set: &Membership, value: &Value, parent: Parent<'_>) -> bool {
    set.values
        .iter()
        .any(|entry| resolve(entry, parent).is_some_and(|candidate| values_equal(candidate, value)))
}

/// Numbers compare by value so that `1` and `1.0` are the same member.
fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.as_f64() == y.as_f64(),
        _ => a == b,
    }
}

fn membership_error(
    code: &'static str,
    prefix: &str,
    set: &Membership,
    parent: Parent<'_>,
) -> ValidationError {
    let listed: Vec<String> = set
        .values
        .iter()
        .map(|entry| match resolve(entry, parent) {
            Some(value) => value.to_string(),
            None => "undefined".to_owned(),
        })
        .collect();
    let listed = listed.join(", ");
    let message = set
        .message
        .clone()
        .unwrap_or_else(|| format!("{prefix}: {listed}"));
    ValidationError::new(code, message).with_param("values", listed)
}
