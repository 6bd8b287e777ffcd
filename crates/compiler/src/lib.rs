//! # stencil-compiler
//!
//! Compiles data-only schema descriptions into live validators.
//!
//! A description is plain decoded data. Sequences whose head names a
//! builder (a string containing the marker, `stencil.` by default) are
//! invocations; a sequence of invocations is a chain where each step
//! refines the schema built by the previous one; mappings describe object
//! fields.
//!
//! ```
//! use stencil_compiler::{Node, transform};
//! use serde_json::json;
//!
//! let node = Node::try_from(json!([
//!     ["stencil.number"],
//!     ["stencil.required"],
//!     ["stencil.min", 50],
//!     ["stencil.max", 500],
//! ]))?;
//! let schema = transform(&node)?.into_schema().unwrap();
//!
//! assert!(schema.is_valid(&json!(50)));
//! assert!(!schema.is_valid(&json!(501)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Name resolution
//!
//! Names resolve against the custom [`Registry`] first, then against the
//! schema built so far (`min` on a number), then the library root
//! (`number`). Unknown names fail with [`CompileError::NameResolution`].

// CompileError carries nested errors by value; boxing every variant would
// only move the allocation around.
#![allow(clippy::result_large_err)]

mod chain;
pub mod classify;
mod compiler;
pub mod config;
pub mod diagnostics;
pub mod error;
mod invocation;
pub mod node;
pub mod registry;
pub mod resolve;
mod shape;

use std::sync::LazyLock;

pub use classify::{NodeClass, classify, is_invocation};
pub use compiler::{Compiler, CompilerBuilder};
pub use config::{CompilerConfig, ConfigError};
pub use diagnostics::{diagnostics_enabled, set_diagnostics};
pub use error::CompileError;
pub use node::{Node, NodeError};
pub use registry::{CustomBuilder, Registry};
pub use resolve::Binding;

pub use stencil_validator::term::Term;

static DEFAULT_COMPILER: LazyLock<Compiler> = LazyLock::new(Compiler::new);

/// Compiles `node` with the default compiler. See [`Compiler::compile`].
pub fn compile(node: &Node) -> Result<Term, CompileError> {
    DEFAULT_COMPILER.compile(node)
}

/// Compiles a top-level description with the default compiler.
/// See [`Compiler::transform`].
pub fn transform(node: &Node) -> Result<Term, CompileError> {
    DEFAULT_COMPILER.transform(node)
}
