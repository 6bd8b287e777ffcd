//! The compiler and its entry points.

use stencil_validator::library::Library;
use stencil_validator::term::Term;

use crate::classify::{NodeClass, classify};
use crate::config::CompilerConfig;
use crate::error::CompileError;
use crate::node::Node;
use crate::registry::Registry;

/// Compiles schema descriptions against a library and a custom registry.
///
/// A compiler holds no mutable state; it is `Send + Sync` and any number of
/// compilations may run through one `&Compiler` at once.
///
/// # Examples
///
/// ```
/// use stencil_compiler::{Compiler, Node};
/// use serde_json::json;
///
/// let compiler = Compiler::new();
/// let node = Node::try_from(json!({
///     "age": [["stencil.number"], ["stencil.required"], ["stencil.min", 18]],
/// }))?;
/// let schema = compiler.transform(&node)?.into_schema().unwrap();
///
/// assert!(schema.is_valid(&json!({"age": 30})));
/// assert!(!schema.is_valid(&json!({"age": 12})));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Compiler {
    library: Library,
    registry: Registry,
    config: CompilerConfig,
    shape_marker: String,
}

/// Builder for [`Compiler`].
#[derive(Debug, Clone, Default)]
pub struct CompilerBuilder {
    library: Option<Library>,
    registry: Registry,
    config: CompilerConfig,
}

impl CompilerBuilder {
    /// Replaces the built-in library.
    #[must_use]
    pub fn library(mut self, library: Library) -> Self {
        self.library = Some(library);
        self
    }

    #[must_use]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn config(mut self, config: CompilerConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the invocation marker.
    #[must_use]
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.config.marker = marker.into();
        self
    }

    /// Validates the configuration and builds the compiler.
    pub fn build(self) -> Result<Compiler, CompileError> {
        self.config.validate()?;
        let shape_marker = self.config.shape_marker();
        tracing::debug!(
            marker = %self.config.marker,
            custom_builders = self.registry.len(),
            "built schema compiler"
        );
        Ok(Compiler {
            library: self.library.unwrap_or_default(),
            registry: self.registry,
            config: self.config,
            shape_marker,
        })
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new()
    }
}

impl Compiler {
    /// A compiler with the built-in library, no custom builders and the
    /// default marker.
    #[must_use]
    pub fn new() -> Self {
        let config = CompilerConfig::default();
        Self {
            library: Library::new(),
            registry: Registry::new(),
            shape_marker: config.shape_marker(),
            config,
        }
    }

    #[must_use]
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::default()
    }

    #[must_use]
    pub fn library(&self) -> &Library {
        &self.library
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    pub(crate) fn marker(&self) -> &str {
        &self.config.marker
    }

    pub(crate) fn shape_marker(&self) -> &str {
        &self.shape_marker
    }

    /// Classifies `node` under this compiler's marker.
    #[must_use]
    pub fn classify(&self, node: &Node) -> NodeClass {
        classify(node, self.marker())
    }

    /// Compiles any node.
    ///
    /// Invocations and chains build through the library, plain lists
    /// compile item by item, mappings become shapes and scalars pass
    /// through. Errors propagate unwrapped.
    pub fn compile(&self, node: &Node) -> Result<Term, CompileError> {
        match node {
            Node::Sequence(items) => self.compile_sequence(items),
            Node::Mapping(fields) => self.compile_shape(fields),
            scalar => Ok(scalar_term(scalar)),
        }
    }

    /// Compiles a top-level schema description.
    ///
    /// A non-sequence input is read as the fields of a required object, so
    /// `{...}` compiles like
    /// `[["<m>object"], ["<m>required"], ["<m>shape", {...}]]`.
    /// Name-resolution and argument-shape failures come back as
    /// [`CompileError::Compilation`] carrying the serialized input.
    pub fn transform(&self, node: &Node) -> Result<Term, CompileError> {
        let result = match node {
            Node::Sequence(_) => self.compile(node),
            _ => self.compile(&self.implicit_object(node)),
        };
        result.map_err(|e| e.wrap(|| node.to_string()))
    }

    fn implicit_object(&self, fields: &Node) -> Node {
        let marker = self.marker();
        Node::Sequence(vec![
            Node::Sequence(vec![Node::String(format!("{marker}object"))]),
            Node::Sequence(vec![Node::String(format!("{marker}required"))]),
            Node::Sequence(vec![Node::String(self.shape_marker.clone()), fields.clone()]),
        ])
    }

    /// Compiles the items of a sequence: as a chain when they form an
    /// invocation, otherwise independently.
    pub(crate) fn compile_sequence(&self, items: &[Node]) -> Result<Term, CompileError> {
        if crate::classify::is_invocation(items, self.marker()) {
            return self.compile_chain(items);
        }
        items
            .iter()
            .map(|item| self.compile(item))
            .collect::<Result<Vec<_>, _>>()
            .map(Term::List)
    }
}

/// Converts a scalar or regex node into a term.
pub(crate) fn scalar_term(node: &Node) -> Term {
    match node {
        Node::Regex(regex) => Term::Regex(regex.clone()),
        other => Term::Literal(other.to_value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_compiler_is_send_sync() {
        assert_send_sync::<Compiler>();
    }

    #[test]
    fn test_builder_rejects_empty_marker() {
        let err = Compiler::builder().marker("").build().unwrap_err();
        assert!(matches!(err, CompileError::Config(_)));
    }

    #[test]
    fn test_implicit_object_uses_marker() {
        let compiler = Compiler::builder().marker("y.").build().unwrap();
        let node = compiler.implicit_object(&Node::Null);
        assert_eq!(node.to_string(), r#"[["y.object"],["y.required"],["y.shape",null]]"#);
    }
}
