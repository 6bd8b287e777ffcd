//! Prelude module for convenient imports.
//!
//! ```
//! use stencil_validator::prelude::*;
//!
//! let name = Schema::string().required(None).rule(min_length(2));
//! assert!(name.is_valid(&serde_json::json!("Al")));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Validate, ValidationError, ValidationErrors, ValueRule};

// ============================================================================
// SCHEMA MODEL
// ============================================================================

pub use crate::library::{Args, BuildError, Library};
pub use crate::schema::{Allowed, Kind, KindTag, Schema};
pub use crate::term::{Reference, Term};

// ============================================================================
// VALIDATORS AND COMBINATORS
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

pub use crate::combinators::{WithMessage, with_message};
