//! # stencil-validator
//!
//! Dynamically built validators for JSON values, and the named-builder
//! library a schema description is compiled against.
//!
//! ## Quick Start
//!
//! ```
//! use stencil_validator::prelude::*;
//! use serde_json::json;
//!
//! let age = Schema::number().required(None).rule(min(18.0)).rule(max(130.0));
//! assert!(age.is_valid(&json!(42)));
//! assert!(!age.is_valid(&json!(12)));
//! assert!(!age.is_valid_opt(None));
//! ```
//!
//! ## Building by name
//!
//! [`Library`](library::Library) exposes every builder under the name a
//! schema description uses (`number`, `min`, `shape`, ...). Builders return a
//! [`Term`](term::Term): usually a [`Schema`](schema::Schema), sometimes a
//! placeholder such as a [`Reference`](term::Reference).
//!
//! ## Creating Rules
//!
//! Use the [`validator!`] macro for zero-boilerplate rules, or implement
//! [`Validate`](foundation::Validate) manually for complex cases.

// ValidationError is the fundamental error type for every rule; boxing it
// would add indirection to every validation call.
#![allow(clippy::result_large_err)]

pub mod combinators;
pub mod foundation;
pub mod library;
mod macros;
pub mod prelude;
pub mod schema;
pub mod term;
pub mod validators;
