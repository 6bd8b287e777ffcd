//! Values produced by schema builders.
//!
//! Every builder in the [`Library`](crate::library::Library) takes a list of
//! [`Term`]s and returns a new [`Term`]. Most builders return a
//! [`Schema`], but references, shapes, literals and plain lists flow through
//! the same channel so that one builder's output can be another's argument.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde_json::{Map, Value};

use crate::schema::Schema;

/// A compiled value: the output of a builder or of compiling a schema node.
#[derive(Debug, Clone)]
pub enum Term {
    /// A scalar passed through unchanged (null, boolean, number, string).
    Literal(Value),
    /// A regular expression.
    Regex(Regex),
    /// A plain list of terms.
    List(Vec<Term>),
    /// A field name to term mapping, compiled from a schema mapping.
    Shape(BTreeMap<String, Term>),
    /// A validator.
    Schema(Schema),
    /// A placeholder referring to a sibling field.
    Reference(Reference),
}

impl Term {
    /// Short name of the variant, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Literal(_) => "literal",
            Self::Regex(_) => "regex",
            Self::List(_) => "list",
            Self::Shape(_) => "shape",
            Self::Schema(_) => "schema",
            Self::Reference(_) => "reference",
        }
    }

    /// Returns true for `null`, `false`, numeric zero and the empty string.
    #[must_use]
    pub fn is_falsy(&self) -> bool {
        match self {
            Self::Literal(Value::Null) => true,
            Self::Literal(Value::Bool(b)) => !b,
            Self::Literal(Value::Number(n)) => n.as_f64().is_some_and(|f| f == 0.0),
            Self::Literal(Value::String(s)) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the schema if this term is one.
    #[must_use]
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            Self::Schema(schema) => Some(schema),
            _ => None,
        }
    }

    /// Consumes the term, returning the schema if it is one.
    #[must_use]
    pub fn into_schema(self) -> Option<Schema> {
        match self {
            Self::Schema(schema) => Some(schema),
            _ => None,
        }
    }

    /// Returns the list items if this term is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Term]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the shape entries if this term is a shape.
    #[must_use]
    pub fn as_shape(&self) -> Option<&BTreeMap<String, Term>> {
        match self {
            Self::Shape(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns the literal value if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Value> {
        match self {
            Self::Literal(value) => Some(value),
            _ => None,
        }
    }

    /// Returns true if this term is a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<Schema> for Term {
    fn from(schema: Schema) -> Self {
        Self::Schema(schema)
    }
}

impl From<Reference> for Term {
    fn from(reference: Reference) -> Self {
        Self::Reference(reference)
    }
}

impl From<Value> for Term {
    fn from(value: Value) -> Self {
        Self::Literal(value)
    }
}

// ============================================================================
// REFERENCE
// ============================================================================

/// A dotted path to a sibling field, resolved when the owning object is
/// validated.
///
/// # Examples
///
/// ```
/// use stencil_validator::term::Reference;
/// use serde_json::json;
///
/// let parent = json!({"password": "hunter2", "nested": {"a": 1}});
/// let parent = parent.as_object().unwrap();
///
/// assert_eq!(Reference::new("password").resolve(Some(parent)), Some(&json!("hunter2")));
/// assert_eq!(Reference::new("nested.a").resolve(Some(parent)), Some(&json!(1)));
/// assert_eq!(Reference::new("missing").resolve(Some(parent)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    path: String,
}

impl Reference {
    /// Creates a reference to the given dotted path.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The dotted path this reference points at.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Resolves the reference against the parent object of the value being validated.
    #[must_use]
    pub fn resolve<'a>(&self, parent: Option<&'a Map<String, Value>>) -> Option<&'a Value> {
        let mut segments = self.path.split('.');
        let first = segments.next()?;
        let mut current = parent?.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ref({})", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_terms() {
        assert!(Term::Literal(json!(null)).is_falsy());
        assert!(Term::Literal(json!(false)).is_falsy());
        assert!(Term::Literal(json!(0)).is_falsy());
        assert!(Term::Literal(json!(0.0)).is_falsy());
        assert!(Term::Literal(json!("")).is_falsy());

        assert!(!Term::Literal(json!(1)).is_falsy());
        assert!(!Term::Literal(json!("0")).is_falsy());
        assert!(!Term::List(Vec::new()).is_falsy());
        assert!(!Term::Schema(Schema::number()).is_falsy());
    }

    #[test]
    fn test_reference_without_parent() {
        assert_eq!(Reference::new("a").resolve(None), None);
    }

    #[test]
    fn test_reference_display() {
        assert_eq!(Reference::new("user.name").to_string(), "ref(user.name)");
    }
}
