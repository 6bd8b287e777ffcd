//! Validator combinators

pub mod message;

pub use message::{WithMessage, with_message};
