//! # stencil-log
//!
//! Logging bootstrap for Stencil binaries, built on `tracing` and
//! `tracing-subscriber`.
//!
//! ```no_run
//! let _guard = stencil_log::init_with(stencil_log::Config::from_env())?;
//! tracing::info!(schema = "user.json", "compiling");
//! # Ok::<(), stencil_log::LogError>(())
//! ```
//!
//! Libraries only emit events through `tracing`; installing a subscriber is
//! left to the binary.

#![forbid(unsafe_code)]

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, FORMAT_ENV, Format, LEVEL_ENV, WriterConfig};
pub use error::{LogError, LogResult};

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
