//! Schema description nodes.
//!
//! A [`Node`] is the already-decoded input of a compile pass: nested
//! sequences and mappings over scalars and regular-expression literals.
//! JSON has no regex literal, so an object of the form
//! `{"$regex": "...", "$flags": "im"}` decodes to [`Node::Regex`] and a
//! regex node encodes back to `{"$regex": "..."}` with the flags folded into
//! the pattern.

use std::collections::BTreeMap;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use thiserror::Error;

const REGEX_KEY: &str = "$regex";
const FLAGS_KEY: &str = "$flags";

/// One node of a schema description.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Regex(Regex),
    Sequence(Vec<Node>),
    Mapping(BTreeMap<String, Node>),
}

/// Errors decoding a [`Node`] from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NodeError {
    /// The `$regex` pattern failed to compile.
    #[error("invalid regular expression `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern as written.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// `$flags` contained something other than `i`, `m`, `s` or `x`.
    #[error("unsupported regular expression flag `{0}`")]
    UnsupportedFlag(char),

    /// `$regex` or `$flags` was not a string.
    #[error("`{0}` must be a string")]
    NotAString(&'static str),
}

impl Node {
    /// Returns the string if this node is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the items if this node is a sequence.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Converts the node back into JSON.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::Regex(regex) => {
                let mut object = Map::new();
                object.insert(REGEX_KEY.to_owned(), Value::String(regex.as_str().to_owned()));
                Value::Object(object)
            }
            Self::Sequence(items) => Value::Array(items.iter().map(Self::to_value).collect()),
            Self::Mapping(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(key, node)| (key.clone(), node.to_value()))
                    .collect(),
            ),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Regex(a), Self::Regex(b)) => a.as_str() == b.as_str(),
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Mapping(a), Self::Mapping(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        node.to_value()
    }
}

impl TryFrom<Value> for Node {
    type Error = NodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Ok(match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(object) if is_regex_literal(&object) => Self::Regex(decode_regex(&object)?),
            Value::Object(object) => Self::Mapping(
                object
                    .into_iter()
                    .map(|(key, value)| Ok((key, Self::try_from(value)?)))
                    .collect::<Result<_, NodeError>>()?,
            ),
        })
    }
}

impl TryFrom<&Value> for Node {
    type Error = NodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::try_from(value.clone())
    }
}

impl From<Regex> for Node {
    fn from(regex: Regex) -> Self {
        Self::Regex(regex)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Self::Sequence(items)
    }
}

fn is_regex_literal(object: &Map<String, Value>) -> bool {
    object.contains_key(REGEX_KEY)
        && object.keys().all(|key| key == REGEX_KEY || key == FLAGS_KEY)
}

fn decode_regex(object: &Map<String, Value>) -> Result<Regex, NodeError> {
    let pattern = object
        .get(REGEX_KEY)
        .and_then(Value::as_str)
        .ok_or(NodeError::NotAString(REGEX_KEY))?;
    let flags = match object.get(FLAGS_KEY) {
        None => "",
        Some(value) => value.as_str().ok_or(NodeError::NotAString(FLAGS_KEY))?,
    };

    if let Some(flag) = flags.chars().find(|c| !matches!(c, 'i' | 'm' | 's' | 'x')) {
        return Err(NodeError::UnsupportedFlag(flag));
    }
    if flags.is_empty() {
        return compile_pattern(pattern);
    }
    // Flags are folded into the pattern so the encoded form stays self-contained.
    Regex::new(&format!("(?{flags}){pattern}")).map_err(|e| invalid_pattern(pattern, &e))
}

/// Compiles a pattern written as a plain string.
pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex, NodeError> {
    Regex::new(pattern).map_err(|e| invalid_pattern(pattern, &e))
}

fn invalid_pattern(pattern: &str, error: &regex::Error) -> NodeError {
    NodeError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_nested() {
        let node = Node::try_from(json!([["stencil.number"], {"a": [1, "x"]}])).unwrap();
        let Node::Sequence(items) = &node else {
            panic!("expected a sequence");
        };
        assert_eq!(items.len(), 2);
        assert!(matches!(items[1], Node::Mapping(_)));
    }

    #[test]
    fn test_regex_literal() {
        let node = Node::try_from(json!({"$regex": "^a+$"})).unwrap();
        let Node::Regex(regex) = &node else {
            panic!("expected a regex");
        };
        assert!(regex.is_match("aaa"));
        assert_eq!(node.to_value(), json!({"$regex": "^a+$"}));
    }

    #[test]
    fn test_regex_flags_fold_into_pattern() {
        let node = Node::try_from(json!({"$regex": "^abc$", "$flags": "i"})).unwrap();
        let Node::Regex(regex) = &node else {
            panic!("expected a regex");
        };
        assert!(regex.is_match("ABC"));
        assert_eq!(regex.as_str(), "(?i)^abc$");
    }

    #[test]
    fn test_regex_errors() {
        assert!(matches!(
            Node::try_from(json!({"$regex": "("})),
            Err(NodeError::InvalidPattern { .. })
        ));
        assert_eq!(
            Node::try_from(json!({"$regex": "a", "$flags": "g"})).unwrap_err(),
            NodeError::UnsupportedFlag('g')
        );
        assert_eq!(
            Node::try_from(json!({"$regex": 1})).unwrap_err(),
            NodeError::NotAString("$regex")
        );
    }

    #[test]
    fn test_object_with_extra_keys_is_a_mapping() {
        let node = Node::try_from(json!({"$regex": "a", "other": 1})).unwrap();
        assert!(matches!(node, Node::Mapping(_)));
    }

    #[test]
    fn test_serde_round_trip() {
        let node: Node = serde_json::from_str(r#"["stencil.min", 4]"#).unwrap();
        assert_eq!(serde_json::to_string(&node).unwrap(), r#"["stencil.min",4]"#);
        assert_eq!(node.to_string(), r#"["stencil.min",4]"#);
    }
}
