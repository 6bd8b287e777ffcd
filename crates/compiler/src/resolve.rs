//! Name resolution.
//!
//! Order: custom registry, then a member of the chaining context, then a
//! library root. Library names must carry the marker; everything up to and
//! including its first occurrence is stripped.

use std::fmt;

use stencil_validator::library::{Args, BuildError, MemberBuilder, RootBuilder};
use stencil_validator::schema::Schema;
use stencil_validator::term::Term;

use crate::Compiler;
use crate::error::CompileError;
use crate::node::Node;
use crate::registry::CustomBuilder;

/// A resolved builder, bound to its receiver when it has one.
#[derive(Clone)]
pub enum Binding {
    /// A registry builder; ignores the chaining context.
    Custom { name: String, builder: CustomBuilder },
    /// A library member bound to the current context.
    Member {
        name: String,
        receiver: Schema,
        build: MemberBuilder,
    },
    /// A library root; starts a new chain.
    Root { name: String, build: RootBuilder },
}

impl Binding {
    /// The bare builder name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name, .. } | Self::Member { name, .. } | Self::Root { name, .. } => name,
        }
    }

    /// True for built-in library builders.
    #[must_use]
    pub fn is_library(&self) -> bool {
        !matches!(self, Self::Custom { .. })
    }

    /// Calls the builder with compiled arguments.
    pub fn call(self, args: Vec<Term>) -> Result<Term, BuildError> {
        match self {
            Self::Custom { builder, .. } => builder(args),
            Self::Member {
                name,
                receiver,
                build,
            } => build(receiver, &Args::new(name, args)),
            Self::Root { name, build } => build(&Args::new(name, args)),
        }
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Custom { .. } => "Custom",
            Self::Member { .. } => "Member",
            Self::Root { .. } => "Root",
        };
        f.debug_tuple(kind).field(&self.name()).finish()
    }
}

impl Compiler {
    /// Resolves an invocation name slot against `context`.
    ///
    /// A sequence in the name slot is normalized to its first element.
    /// `None` as context means the library root.
    pub fn resolve(&self, name: &Node, context: Option<&Term>) -> Result<Binding, CompileError> {
        let name = match name {
            Node::Sequence(items) => items.first().unwrap_or(name),
            other => other,
        };
        let Some(name) = name.as_str() else {
            return Err(CompileError::NameResolution {
                name: name.to_string(),
            });
        };

        if let Some(builder) = self.registry().get(name) {
            return Ok(Binding::Custom {
                name: name.to_owned(),
                builder: builder.clone(),
            });
        }

        let marker = &self.config().marker;
        let Some((_, bare)) = name.split_once(marker.as_str()) else {
            return Err(unresolved(name));
        };

        if let Some(builder) = self.registry().get(bare) {
            return Ok(Binding::Custom {
                name: bare.to_owned(),
                builder: builder.clone(),
            });
        }

        if let Some(Term::Schema(receiver)) = context {
            if let Some(build) = self.library().member(receiver, bare) {
                return Ok(Binding::Member {
                    name: bare.to_owned(),
                    receiver: receiver.clone(),
                    build,
                });
            }
        }

        self.library()
            .root(bare)
            .map(|build| Binding::Root {
                name: bare.to_owned(),
                build,
            })
            .ok_or_else(|| unresolved(name))
    }
}

fn unresolved(name: &str) -> CompileError {
    CompileError::NameResolution {
        name: name.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;

    fn compiler() -> Compiler {
        let registry = Registry::new().with("slug", |_| Ok(Schema::string().into()));
        Compiler::builder().registry(registry).build().unwrap()
    }

    #[test]
    fn test_root_without_context() {
        let binding = compiler().resolve(&Node::from("stencil.number"), None).unwrap();
        assert!(matches!(binding, Binding::Root { ref name, .. } if name == "number"));
    }

    #[test]
    fn test_member_wins_over_root() {
        let context = Term::Schema(Schema::number());
        let binding = compiler()
            .resolve(&Node::from("stencil.min"), Some(&context))
            .unwrap();
        assert!(matches!(binding, Binding::Member { ref name, .. } if name == "min"));
    }

    #[test]
    fn test_root_fallback_from_context() {
        let context = Term::Schema(Schema::number());
        let binding = compiler()
            .resolve(&Node::from("stencil.string"), Some(&context))
            .unwrap();
        assert!(matches!(binding, Binding::Root { .. }));
    }

    #[test]
    fn test_custom_wins_without_marker() {
        let binding = compiler().resolve(&Node::from("slug"), None).unwrap();
        assert!(!binding.is_library());
        let binding = compiler().resolve(&Node::from("stencil.slug"), None).unwrap();
        assert_eq!(binding.name(), "slug");
        assert!(!binding.is_library());
    }

    #[test]
    fn test_wrapped_name_is_normalized() {
        let name = Node::Sequence(vec![Node::from("stencil.boolean")]);
        let binding = compiler().resolve(&name, None).unwrap();
        assert_eq!(binding.name(), "boolean");
    }

    #[test]
    fn test_bare_name_after_first_marker() {
        let err = compiler()
            .resolve(&Node::from("x.stencil.stencil.number"), None)
            .unwrap_err();
        assert!(matches!(err, CompileError::NameResolution { ref name } if name == "x.stencil.stencil.number"));

        let binding = compiler().resolve(&Node::from("x.stencil.number"), None).unwrap();
        assert_eq!(binding.name(), "number");
    }

    #[test]
    fn test_unresolved() {
        for name in ["number", "stencil.numbr", "stencil."] {
            let err = compiler().resolve(&Node::from(name), None).unwrap_err();
            assert!(matches!(err, CompileError::NameResolution { .. }), "{name}");
        }
        let err = compiler().resolve(&Node::Bool(true), None).unwrap_err();
        assert_eq!(err.to_string(), "cannot resolve invocation name `true`");
    }

    #[test]
    fn test_member_gated_by_context_kind() {
        let context = Term::Schema(Schema::boolean());
        let err = compiler()
            .resolve(&Node::from("stencil.min"), Some(&context))
            .unwrap_err();
        assert!(matches!(err, CompileError::NameResolution { .. }));
    }
}
