//! Configuration types
//!
//! - `base`: core configuration (`Config`, `Format`)
//! - `display`: output decoration and destination
//! - `presets`: pre-configured setups (environment, development, production)

mod base;
mod display;
mod presets;

pub use base::{Config, Format};
pub use display::{DisplayConfig, WriterConfig};
pub use presets::{FORMAT_ENV, LEVEL_ENV};
