//! Custom builder registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use stencil_validator::library::BuildError;
use stencil_validator::term::Term;

/// A user-supplied builder. Custom builders are free functions: they see the
/// compiled arguments but never the chaining context.
pub type CustomBuilder = Arc<dyn Fn(Vec<Term>) -> Result<Term, BuildError> + Send + Sync>;

/// Named custom builders, consulted before the built-in library.
///
/// Populate the registry up front and hand it to the
/// [`Compiler`](crate::Compiler); it is read-only from then on.
///
/// # Examples
///
/// ```
/// use stencil_compiler::Registry;
/// use stencil_validator::prelude::*;
///
/// let mut registry = Registry::new();
/// registry.register("even", |_args| {
///     let even = Predicate::new("even", "Must be even", |v| {
///         v.as_i64().is_some_and(|n| n % 2 == 0)
///     });
///     Ok(Schema::number().rule(even).into())
/// });
/// assert!(registry.contains("even"));
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    builders: HashMap<String, CustomBuilder>,
}

impl Registry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a custom builder.
    ///
    /// If a builder with the same name already exists, it is replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, builder: F)
    where
        F: Fn(Vec<Term>) -> Result<Term, BuildError> + Send + Sync + 'static,
    {
        let name = name.into();
        tracing::debug!(builder = %name, "registered custom builder");
        self.builders.insert(name, Arc::new(builder));
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with<F>(mut self, name: impl Into<String>, builder: F) -> Self
    where
        F: Fn(Vec<Term>) -> Result<Term, BuildError> + Send + Sync + 'static,
    {
        self.register(name, builder);
        self
    }

    /// Look up a builder by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CustomBuilder> {
        self.builders.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.builders.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("builders", &self.names())
            .finish()
    }
}
