//! Dynamic schemas
//!
//! A [`Schema`] is an immutable validator over `serde_json::Value`. Every
//! refinement consumes the schema and returns a new one, so a schema that
//! has been handed out is never changed behind its owner's back.
//!
//! ```
//! use stencil_validator::schema::Schema;
//! use stencil_validator::validators::{max, min};
//! use serde_json::json;
//!
//! let age = Schema::number().required(None).rule(min(18.0)).rule(max(130.0));
//! assert!(age.is_valid(&json!(42)));
//! assert!(!age.is_valid(&json!(12)));
//! assert!(!age.is_valid_opt(None));
//! ```

mod describe;
mod validate;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::combinators::WithMessage;
use crate::foundation::ValueRule;
use crate::term::Reference;

// ============================================================================
// KIND
// ============================================================================

/// What a schema accepts before any rule runs.
#[derive(Debug, Clone)]
pub enum Kind {
    /// Any value.
    Mixed,
    /// A JSON string.
    String,
    /// A JSON number.
    Number,
    /// A JSON boolean.
    Boolean,
    /// A JSON object with optional per-field schemas.
    Object(BTreeMap<String, Schema>),
    /// A JSON array with an optional element schema.
    Array(Option<Box<Schema>>),
}

impl Kind {
    /// The fieldless tag of this kind.
    #[must_use]
    pub fn tag(&self) -> KindTag {
        match self {
            Self::Mixed => KindTag::Mixed,
            Self::String => KindTag::String,
            Self::Number => KindTag::Number,
            Self::Boolean => KindTag::Boolean,
            Self::Object(_) => KindTag::Object,
            Self::Array(_) => KindTag::Array,
        }
    }
}

/// Fieldless schema kind, used to gate which members a schema exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Mixed,
    String,
    Number,
    Boolean,
    Object,
    Array,
}

impl KindTag {
    /// Lowercase name, as reported in `describe()` and type errors.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MEMBERSHIP
// ============================================================================

/// One entry of a `oneOf` / `notOneOf` set.
#[derive(Debug, Clone, PartialEq)]
pub enum Allowed {
    /// A literal value.
    Value(Value),
    /// A sibling field, resolved at validation time.
    Ref(Reference),
}

/// A set of allowed or denied values with an optional custom message.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub values: Vec<Allowed>,
    pub message: Option<String>,
}

// ============================================================================
// SCHEMA
// ============================================================================

/// An immutable, composable validator over JSON values.
#[derive(Debug, Clone)]
pub struct Schema {
    kind: Kind,
    required: bool,
    required_message: Option<String>,
    nullable: bool,
    label: Option<String>,
    rules: Vec<Arc<dyn ValueRule>>,
    one_of: Option<Membership>,
    not_one_of: Option<Membership>,
}

impl Schema {
    fn of_kind(kind: Kind) -> Self {
        Self {
            kind,
            required: false,
            required_message: None,
            nullable: false,
            label: None,
            rules: Vec::new(),
            one_of: None,
            not_one_of: None,
        }
    }

    /// A schema accepting any value.
    #[must_use]
    pub fn mixed() -> Self {
        Self::of_kind(Kind::Mixed)
    }

    /// A schema accepting strings.
    #[must_use]
    pub fn string() -> Self {
        Self::of_kind(Kind::String)
    }

    /// A schema accepting numbers.
    #[must_use]
    pub fn number() -> Self {
        Self::of_kind(Kind::Number)
    }

    /// A schema accepting booleans.
    #[must_use]
    pub fn boolean() -> Self {
        Self::of_kind(Kind::Boolean)
    }

    /// A schema accepting objects, with no field constraints yet.
    #[must_use]
    pub fn object() -> Self {
        Self::of_kind(Kind::Object(BTreeMap::new()))
    }

    /// A schema accepting arrays of anything.
    #[must_use]
    pub fn array() -> Self {
        Self::of_kind(Kind::Array(None))
    }

    // ── refinements ─────────────────────────────────────────────────────

    /// Marks the value as required, optionally overriding the error message.
    #[must_use]
    pub fn required(mut self, message: Option<String>) -> Self {
        self.required = true;
        self.required_message = message;
        self
    }

    /// Undoes [`required`](Self::required).
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self.required_message = None;
        self
    }

    /// Allows or forbids `null`.
    #[must_use]
    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Sets a human label, reported as the `label` param on errors.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, rule: impl ValueRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Appends a rule, wrapping it in [`WithMessage`] when a message is given.
    #[must_use]
    pub fn rule_with_message(self, rule: impl ValueRule + 'static, message: Option<String>) -> Self {
        match message {
            Some(message) => self.rule(WithMessage::new(rule, message)),
            None => self.rule(rule),
        }
    }

    /// Restricts the value to the given set.
    #[must_use]
    pub fn one_of(mut self, values: Vec<Allowed>, message: Option<String>) -> Self {
        self.one_of = Some(Membership { values, message });
        self
    }

    /// Forbids every value in the given set.
    #[must_use]
    pub fn not_one_of(mut self, values: Vec<Allowed>, message: Option<String>) -> Self {
        self.not_one_of = Some(Membership { values, message });
        self
    }

    /// Attaches field schemas, merging with any fields already present.
    ///
    /// Turns the schema into an object schema if it was not one.
    #[must_use]
    pub fn shape(mut self, fields: BTreeMap<String, Schema>) -> Self {
        match &mut self.kind {
            Kind::Object(existing) => existing.extend(fields),
            _ => self.kind = Kind::Object(fields),
        }
        self
    }

    /// Sets the element schema. Turns the schema into an array schema if it was not one.
    #[must_use]
    pub fn of(mut self, element: Schema) -> Self {
        self.kind = Kind::Array(Some(Box::new(element)));
        self
    }

    // ── accessors ───────────────────────────────────────────────────────

    #[must_use]
    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    #[must_use]
    pub fn tag(&self) -> KindTag {
        self.kind.tag()
    }

    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[must_use]
    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn ValueRule>] {
        &self.rules
    }

    /// Field schemas, if this is an object schema.
    #[must_use]
    pub fn fields(&self) -> Option<&BTreeMap<String, Schema>> {
        match &self.kind {
            Kind::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Element schema, if this is an array schema with one.
    #[must_use]
    pub fn element(&self) -> Option<&Schema> {
        match &self.kind {
            Kind::Array(element) => element.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::min;

    #[test]
    fn test_refinements_do_not_touch_the_original() {
        let base = Schema::number();
        let refined = base.clone().required(None).rule(min(1.0));

        assert!(!base.is_required());
        assert!(base.rules().is_empty());
        assert!(refined.is_required());
        assert_eq!(refined.rules().len(), 1);
    }

    #[test]
    fn test_shape_merges_fields() {
        let schema = Schema::object()
            .shape(BTreeMap::from([("a".to_owned(), Schema::string())]))
            .shape(BTreeMap::from([("b".to_owned(), Schema::number())]));

        let fields = schema.fields().unwrap();
        assert_eq!(fields.keys().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn test_of_sets_element() {
        let schema = Schema::array().of(Schema::string());
        assert_eq!(schema.element().map(Schema::tag), Some(KindTag::String));
    }
}
