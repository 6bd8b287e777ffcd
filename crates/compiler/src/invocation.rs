//! Single invocations: resolve, compile arguments, call.

use stencil_validator::term::Term;

use crate::Compiler;
use crate::diagnostics::diagnostic;
use crate::error::CompileError;
use crate::node::{Node, compile_pattern};

/// The builder whose first argument is a regular expression.
const PATTERN_BUILDER: &str = "matches";

impl Compiler {
    /// Compiles one invocation `[name, ...args]` against `context`.
    pub(crate) fn compile_invocation(
        &self,
        items: &[Node],
        context: Option<&Term>,
    ) -> Result<Term, CompileError> {
        let Some((name, raw_args)) = items.split_first() else {
            return Err(CompileError::NameResolution {
                name: "[]".to_owned(),
            });
        };
        if name.is_sequence() {
            return self.compile_chain(items);
        }

        let binding = self.resolve(name, context)?;
        diagnostic!(
            name = %name,
            builder = binding.name(),
            binding = ?binding,
            args = raw_args.len(),
            "resolved invocation"
        );

        let args = if binding.is_library() && binding.name() == PATTERN_BUILDER {
            self.compile_arguments(&coerce_pattern(raw_args)?)?
        } else {
            self.compile_arguments(raw_args)?
        };

        Ok(binding.call(args)?)
    }

    /// Compiles the raw argument list as a whole and applies the spreading
    /// policy: an all-falsy list means no arguments, a list spreads, and any
    /// other result is the single argument.
    fn compile_arguments(&self, raw_args: &[Node]) -> Result<Vec<Term>, CompileError> {
        Ok(match self.compile_sequence(raw_args)? {
            Term::List(items) if items.iter().all(Term::is_falsy) => Vec::new(),
            Term::List(items) => items,
            single => vec![single],
        })
    }
}

/// Turns a string first argument into a regex node.
fn coerce_pattern(raw_args: &[Node]) -> Result<Vec<Node>, CompileError> {
    let coerced = match raw_args.first() {
        Some(Node::String(pattern)) => {
            let regex = compile_pattern(pattern).map_err(|e| CompileError::ArgumentShape {
                builder: PATTERN_BUILDER.to_owned(),
                reason: e.to_string(),
            })?;
            Node::Regex(regex)
        }
        Some(other @ (Node::Number(_) | Node::Bool(_))) => {
            return Err(CompileError::ArgumentShape {
                builder: PATTERN_BUILDER.to_owned(),
                reason: format!("expected a pattern string or regular expression, found {other}"),
            });
        }
        _ => return Ok(raw_args.to_vec()),
    };
    let mut args = raw_args.to_vec();
    args[0] = coerced;
    Ok(args)
}
