//! Built-in value rules
//!
//! Every rule validates a `serde_json::Value` and ignores inputs of a type
//! it does not constrain, so rules can be stacked on a schema whose kind
//! check has already run.

pub mod content;
pub mod length;
pub mod predicate;
pub mod range;
pub mod size;

pub use content::{Email, Lowercase, Matches, Uppercase, Url, email, lowercase, matches, uppercase, url};
pub use length::{ExactLength, MaxLength, MinLength, exact_length, max_length, min_length};
pub use predicate::Predicate;
pub use range::{Integer, LessThan, Max, Min, MoreThan, integer, less_than, max, min, more_than};
pub use size::{ExactSize, MaxSize, MinSize, exact_size, max_size, min_size};
