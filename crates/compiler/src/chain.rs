//! Invocation chains.
//!
//! `[inv0, inv1, ...]` compiles `inv0` from the library root, then folds
//! every later element onto the running accumulator:
//!
//! - a sequence is an invocation resolved against the accumulator,
//! - the shape marker literal switches into shape compilation,
//! - any other element is appended as a trailing value, turning the
//!   accumulator into a plain list (`[ref, "message"]` forms).

use stencil_validator::term::Term;

use crate::Compiler;
use crate::diagnostics::diagnostic;
use crate::error::CompileError;
use crate::node::Node;

impl Compiler {
    /// Compiles a sequence already classified as an invocation.
    pub(crate) fn compile_chain(&self, items: &[Node]) -> Result<Term, CompileError> {
        let Some((head, rest)) = items.split_first() else {
            return Ok(Term::List(Vec::new()));
        };
        let Node::Sequence(first) = head else {
            return self.compile_invocation(items, None);
        };

        let mut accumulator = self.compile_invocation(first, None)?;
        for (step, element) in rest.iter().enumerate() {
            accumulator = match element {
                Node::Sequence(invocation) => self.compile_invocation(invocation, Some(&accumulator))?,
                Node::String(literal) if literal == self.shape_marker() => {
                    self.continue_with_shape(accumulator)?
                }
                literal => append(accumulator, self.compile(literal)?),
            };
            diagnostic!(step = step + 1, result = accumulator.kind(), "chain step");
        }
        Ok(accumulator)
    }

    /// Applies the shape-continuation marker to the accumulator.
    ///
    /// A bare shape becomes an object with those fields; `[schema, shape]`,
    /// as left by a trailing mapping, applies the shape to the schema.
    fn continue_with_shape(&self, accumulator: Term) -> Result<Term, CompileError> {
        let shape_error = |found: &str| CompileError::ArgumentShape {
            builder: self.shape_marker().to_owned(),
            reason: format!("expected a shape to continue with, found a {found}"),
        };

        match accumulator {
            Term::Shape(_) => self
                .library()
                .call_root("object", vec![accumulator])
                .ok_or_else(|| shape_error("shape"))?
                .map_err(CompileError::from),
            Term::List(mut items) if items.len() == 2 && matches!(items[1], Term::Shape(_)) => {
                let shape = items.pop().ok_or_else(|| shape_error("list"))?;
                let receiver = items.pop().ok_or_else(|| shape_error("list"))?;
                let Term::Schema(receiver) = receiver else {
                    return Err(shape_error(receiver.kind()));
                };
                let kind = receiver.tag();
                self.library()
                    .call_member(receiver, "shape", vec![shape])
                    .ok_or_else(|| shape_error(&format!("{kind} schema")))?
                    .map_err(CompileError::from)
            }
            other => Err(shape_error(other.kind())),
        }
    }
}

fn append(accumulator: Term, value: Term) -> Term {
    match accumulator {
        Term::List(mut items) => {
            items.push(value);
            Term::List(items)
        }
        other => Term::List(vec![other, value]),
    }
}
