//! Field mappings.

use std::collections::BTreeMap;

use stencil_validator::term::Term;

use crate::Compiler;
use crate::error::CompileError;
use crate::node::Node;

impl Compiler {
    /// Compiles every field independently, keeping every key.
    pub(crate) fn compile_shape(&self, fields: &BTreeMap<String, Node>) -> Result<Term, CompileError> {
        fields
            .iter()
            .map(|(key, fragment)| Ok((key.clone(), self.compile(fragment)?)))
            .collect::<Result<BTreeMap<_, _>, CompileError>>()
            .map(Term::Shape)
    }
}
