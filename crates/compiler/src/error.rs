//! Compiler error types.

use stencil_validator::library::BuildError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors from compiling a schema description.
#[derive(Debug, Error)]
pub enum CompileError {
    /// An invocation name matched no custom builder, context member or
    /// library root.
    #[error("cannot resolve invocation name `{name}`")]
    NameResolution {
        /// The name as written.
        name: String,
    },

    /// An argument did not have the shape its builder requires.
    #[error("invalid argument for `{builder}`: {reason}")]
    ArgumentShape {
        /// The builder being called.
        builder: String,
        /// What was wrong.
        reason: String,
    },

    /// A builder rejected its arguments.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// A resolution or argument-shape failure, with the input that caused it.
    #[error("failed to compile {node}: {source}")]
    Compilation {
        /// The top-level input, serialized as JSON.
        node: String,
        /// The underlying failure.
        source: Box<CompileError>,
    },

    /// The compiler configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CompileError {
    /// Whether the public entry point wraps this error in
    /// [`Compilation`](Self::Compilation).
    #[must_use]
    pub fn is_wrapped_at_entry(&self) -> bool {
        matches!(self, Self::NameResolution { .. } | Self::ArgumentShape { .. })
    }

    /// The serialized input node, for a [`Compilation`](Self::Compilation) error.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        match self {
            Self::Compilation { node, .. } => Some(node),
            _ => None,
        }
    }

    pub(crate) fn wrap(self, node: impl FnOnce() -> String) -> Self {
        if self.is_wrapped_at_entry() {
            Self::Compilation {
                node: node(),
                source: Box::new(self),
            }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_resolution_display() {
        let err = CompileError::NameResolution {
            name: "numbr".into(),
        };
        assert_eq!(err.to_string(), "cannot resolve invocation name `numbr`");
    }

    #[test]
    fn wrap_only_resolution_and_shape() {
        let err = CompileError::ArgumentShape {
            builder: "matches".into(),
            reason: "expected a pattern".into(),
        }
        .wrap(|| "[1]".into());
        assert_eq!(err.node(), Some("[1]"));
        assert_eq!(
            err.to_string(),
            "failed to compile [1]: invalid argument for `matches`: expected a pattern"
        );

        let err = CompileError::Build(BuildError::custom("nope")).wrap(|| "[1]".into());
        assert!(matches!(err, CompileError::Build(_)));
    }
}
