//! Structural classification of description nodes.
//!
//! Nothing in a description is tagged: a sequence is an invocation only
//! because its head names a builder, directly or through nested heads.

use crate::node::Node;

/// What a node compiles as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeClass {
    /// A builder call or a chain of them.
    Invocation,
    /// A sequence whose items compile independently.
    PlainList,
    /// A field mapping, compiled into a shape.
    Mapping,
    /// Anything else, passed through as is.
    Scalar,
}

/// Returns true if `items` is an invocation: its head is a string
/// containing `marker`, or a sequence whose own head qualifies.
#[must_use]
pub fn is_invocation(items: &[Node], marker: &str) -> bool {
    match items.first() {
        Some(Node::String(name)) => name.contains(marker),
        Some(Node::Sequence(head)) => is_invocation(head, marker),
        _ => false,
    }
}

/// Classifies `node` relative to `marker`.
#[must_use]
pub fn classify(node: &Node, marker: &str) -> NodeClass {
    match node {
        Node::Sequence(items) if is_invocation(items, marker) => NodeClass::Invocation,
        Node::Sequence(_) => NodeClass::PlainList,
        Node::Mapping(_) => NodeClass::Mapping,
        _ => NodeClass::Scalar,
    }
}
