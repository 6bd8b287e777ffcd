//! Schema introspection.

use serde_json::{Map, Value, json};

use super::{Allowed, Kind, Membership, Schema};
use crate::foundation::Validate;

impl Schema {
    /// Describes the schema as JSON: its type, presence flags, rule names and
    /// nested field or element descriptions.
    ///
    /// ```
    /// use stencil_validator::schema::Schema;
    /// use stencil_validator::validators::min;
    /// use serde_json::json;
    ///
    /// let described = Schema::number().required(None).rule(min(1.0)).describe();
    /// assert_eq!(described["type"], json!("number"));
    /// assert_eq!(described["required"], json!(true));
    /// assert_eq!(described["tests"], json!(["Min"]));
    /// ```
    #[must_use]
    pub fn describe(&self) -> Value {
        let mut out = Map::new();
        out.insert("type".into(), json!(self.tag().as_str()));
        out.insert("required".into(), json!(self.required));
        out.insert("nullable".into(), json!(self.nullable));
        if let Some(label) = &self.label {
            out.insert("label".into(), json!(label));
        }
        out.insert(
            "tests".into(),
            Value::Array(self.rules.iter().map(|r| json!(r.name())).collect()),
        );
        if let Some(set) = &self.one_of {
            out.insert("oneOf".into(), describe_membership(set));
        }
        if let Some(set) = &self.not_one_of {
            out.insert("notOneOf".into(), describe_membership(set));
        }
        match &self.kind {
            Kind::Object(fields) => {
                let fields: Map<String, Value> = fields
                    .iter()
                    .map(|(key, field)| (key.clone(), field.describe()))
                    .collect();
                out.insert("fields".into(), Value::Object(fields));
            }
            Kind::Array(Some(element)) => {
                out.insert("element".into(), element.describe());
            }
            _ => {}
        }
        Value::Object(out)
    }
}

fn describe_membership(set: &Membership) -> Value {
    Value::Array(
        set.values
            .iter()
            .map(|entry| match entry {
                Allowed::Value(value) => value.clone(),
                Allowed::Ref(reference) => json!({ "$ref": reference.path() }),
            })
            .collect(),
    )
}
