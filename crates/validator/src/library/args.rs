//! Typed access to builder arguments.

use std::collections::BTreeMap;

use regex::Regex;
use serde_json::Value;

use super::BuildError;
use crate::schema::{Allowed, Schema};
use crate::term::Term;

/// The compiled arguments of one builder call.
///
/// Accessors take a zero-based position and report mismatches as
/// [`BuildError::InvalidArgument`] naming the builder.
#[derive(Debug, Clone)]
pub struct Args {
    builder: String,
    items: Vec<Term>,
}

impl Args {
    pub fn new(builder: impl Into<String>, items: Vec<Term>) -> Self {
        Self {
            builder: builder.into(),
            items,
        }
    }

    /// Name of the builder being called.
    #[must_use]
    pub fn builder(&self) -> &str {
        &self.builder
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Term> {
        self.items.get(position)
    }

    #[must_use]
    pub fn into_items(self) -> Vec<Term> {
        self.items
    }

    /// Fails if more than `max` arguments were supplied.
    pub fn at_most(&self, max: usize) -> Result<&Self, BuildError> {
        if self.items.len() > max {
            return Err(BuildError::ArgumentCount {
                builder: self.builder.clone(),
                expected: max,
                got: self.items.len(),
            });
        }
        Ok(self)
    }

    pub fn invalid(&self, position: usize, expected: impl Into<String>) -> BuildError {
        BuildError::InvalidArgument {
            builder: self.builder.clone(),
            position,
            expected: expected.into(),
        }
    }

    /// A required number.
    pub fn number(&self, position: usize) -> Result<f64, BuildError> {
        self.get(position)
            .and_then(Term::as_literal)
            .and_then(Value::as_f64)
            .ok_or_else(|| self.invalid(position, "a number"))
    }

    /// A required non-negative integer. Integral floats such as `4.0` count.
    pub fn count(&self, position: usize) -> Result<usize, BuildError> {
        self.get(position)
            .and_then(Term::as_literal)
            .and_then(|value| {
                value.as_u64().or_else(|| {
                    value
                        .as_f64()
                        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= u64::MAX as f64)
                        .map(|n| n as u64)
                })
            })
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.invalid(position, "a non-negative integer"))
    }

    /// A number that defaults when absent.
    ///
    /// A call whose arguments were all falsy arrives with no arguments, so
    /// `min(0)` reaches the builder as `min()`.
    pub fn number_or(&self, position: usize, default: f64) -> Result<f64, BuildError> {
        if self.get(position).is_none() {
            return Ok(default);
        }
        self.number(position)
    }

    /// A count that defaults when absent.
    pub fn count_or(&self, position: usize, default: usize) -> Result<usize, BuildError> {
        if self.get(position).is_none() {
            return Ok(default);
        }
        self.count(position)
    }

    /// A required string.
    pub fn string(&self, position: usize) -> Result<String, BuildError> {
        self.get(position)
            .and_then(Term::as_literal)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| self.invalid(position, "a string"))
    }

    /// An optional message: absent and `null` both mean "no message".
    pub fn message(&self, position: usize) -> Result<Option<String>, BuildError> {
        match self.get(position) {
            None | Some(Term::Literal(Value::Null)) => Ok(None),
            Some(Term::Literal(Value::String(s))) => Ok(Some(s.clone())),
            Some(_) => Err(self.invalid(position, "a message string")),
        }
    }

    /// An optional boolean flag, defaulting to `default`.
    pub fn flag(&self, position: usize, default: bool) -> Result<bool, BuildError> {
        match self.get(position) {
            None | Some(Term::Literal(Value::Null)) => Ok(default),
            Some(Term::Literal(Value::Bool(b))) => Ok(*b),
            Some(_) => Err(self.invalid(position, "a boolean")),
        }
    }

    /// A required regular expression.
    pub fn regex(&self, position: usize) -> Result<Regex, BuildError> {
        match self.get(position) {
            Some(Term::Regex(regex)) => Ok(regex.clone()),
            _ => Err(self.invalid(position, "a regular expression")),
        }
    }

    /// A required schema. A shape is accepted as an optional object schema.
    pub fn schema(&self, position: usize) -> Result<Schema, BuildError> {
        match self.get(position) {
            Some(Term::Schema(schema)) => Ok(schema.clone()),
            Some(Term::Shape(fields)) => Ok(Schema::object().shape(self.fields(position, fields)?)),
            _ => Err(self.invalid(position, "a schema")),
        }
    }

    /// A required shape, converted into field schemas.
    pub fn shape(&self, position: usize) -> Result<BTreeMap<String, Schema>, BuildError> {
        match self.get(position) {
            Some(Term::Shape(fields)) => self.fields(position, fields),
            _ => Err(self.invalid(position, "a shape mapping")),
        }
    }

    fn fields(
        &self,
        position: usize,
        fields: &BTreeMap<String, Term>,
    ) -> Result<BTreeMap<String, Schema>, BuildError> {
        fields
            .iter()
            .map(|(key, term)| {
                let schema = match term {
                    Term::Schema(schema) => schema.clone(),
                    Term::Shape(nested) => Schema::object().shape(self.fields(position, nested)?),
                    other => {
                        return Err(self.invalid(
                            position,
                            format!("a schema for field `{key}`, found a {}", other.kind()),
                        ));
                    }
                };
                Ok((key.clone(), schema))
            })
            .collect()
    }

    /// A set of allowed values: a list argument, or every argument when the
    /// first one is not a list.
    pub fn allowed(&self, position: usize) -> Result<Vec<Allowed>, BuildError> {
        self.allowed_until(position, self.len())
    }

    /// Like [`allowed`](Self::allowed), but spreads only the arguments
    /// before `end`.
    pub fn allowed_until(&self, position: usize, end: usize) -> Result<Vec<Allowed>, BuildError> {
        let entries: &[Term] = match self.get(position) {
            Some(Term::List(items)) => items,
            Some(_) => self.items.get(position..end).unwrap_or_default(),
            None => return Err(self.invalid(position, "a list of values")),
        };
        entries
            .iter()
            .map(|term| match term {
                Term::Literal(value) => Ok(Allowed::Value(value.clone())),
                Term::Reference(reference) => Ok(Allowed::Ref(reference.clone())),
                other => Err(self.invalid(position, format!("a value or reference, found a {}", other.kind()))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Reference;
    use serde_json::json;

    fn args(items: Vec<Term>) -> Args {
        Args::new("test", items)
    }

    #[test]
    fn test_number_and_count() {
        let a = args(vec![Term::Literal(json!(4)), Term::Literal(json!(-1))]);
        assert_eq!(a.number(0).unwrap(), 4.0);
        assert_eq!(a.count(0).unwrap(), 4);
        assert!(a.count(1).is_err());
        assert!(a.number(2).is_err());
    }

    #[test]
    fn test_count_accepts_integral_floats() {
        let a = args(vec![
            Term::Literal(json!(4.0)),
            Term::Literal(json!(4.5)),
            Term::Literal(json!(-2.0)),
        ]);
        assert_eq!(a.count(0).unwrap(), 4);
        assert!(a.count(1).is_err());
        assert!(a.count(2).is_err());
    }

    #[test]
    fn test_message_accepts_null_and_absent() {
        let a = args(vec![Term::Literal(json!(null)), Term::Literal(json!(3))]);
        assert_eq!(a.message(0).unwrap(), None);
        assert_eq!(a.message(5).unwrap(), None);
        assert!(a.message(1).is_err());
    }

    #[test]
    fn test_at_most() {
        let a = args(vec![Term::Literal(json!(1)), Term::Literal(json!(2))]);
        assert!(a.at_most(2).is_ok());
        assert_eq!(
            a.at_most(1).unwrap_err(),
            BuildError::ArgumentCount { builder: "test".into(), expected: 1, got: 2 }
        );
    }

    #[test]
    fn test_allowed_from_list_or_spread() {
        let listed = args(vec![
            Term::List(vec![Term::Literal(json!(1)), Term::Reference(Reference::new("a"))]),
            Term::Literal(json!("message")),
        ]);
        assert_eq!(listed.allowed(0).unwrap().len(), 2);

        let spread = args(vec![Term::Literal(json!(1)), Term::Literal(json!(2))]);
        assert_eq!(spread.allowed(0).unwrap().len(), 2);
        assert_eq!(spread.allowed_until(0, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_shape_rejects_literal_fields() {
        let a = args(vec![Term::Shape(BTreeMap::from([(
            "a".to_owned(),
            Term::Literal(json!(1)),
        )]))]);
        let err = a.shape(0).unwrap_err();
        assert!(err.to_string().contains("field `a`"));
    }
}
