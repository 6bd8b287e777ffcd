//! Logger builder implementation

pub(crate) mod format;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{Registry, layer::SubscriberExt, util::SubscriberInitExt};

use self::format::{create_fmt_layer, create_json_layer};
use crate::config::{Config, Format, WriterConfig};
use crate::error::{LogError, LogResult};

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

/// Handle returned once the global subscriber is installed.
///
/// Keep it for the lifetime of the program; it records the configuration
/// the subscriber was built from.
#[derive(Debug)]
#[must_use = "dropping the guard discards the active logging configuration"]
pub struct LoggerGuard {
    config: Config,
}

impl LoggerGuard {
    /// The configuration in effect.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Builds the registry with filter and format layers, then installs it.
macro_rules! init_subscriber {
    ($filter:expr, $fmt_layer:expr) => {
        Registry::default()
            .with($filter)
            .with($fmt_layer)
            .try_init()
            .map_err(|e| LogError::AlreadyInitialized(e.to_string()))
    };
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Overrides the level filter.
    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config.level = level.into();
        self
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if the filter cannot be parsed or a global
    /// subscriber is already set.
    pub fn build(self) -> LogResult<LoggerGuard> {
        let filter = self.config.filter()?;
        let display = &self.config.display;
        let writer = match self.config.writer {
            WriterConfig::Stderr => BoxMakeWriter::new(std::io::stderr),
            WriterConfig::Stdout => BoxMakeWriter::new(std::io::stdout),
        };

        match self.config.format {
            Format::Pretty => init_subscriber!(filter, create_fmt_layer!(pretty, display, writer))?,
            Format::Compact => init_subscriber!(filter, create_fmt_layer!(compact, display, writer))?,
            Format::Json => init_subscriber!(filter, create_json_layer!(display, writer))?,
        }

        tracing::debug!(
            level = %self.config.level,
            format = %self.config.format,
            "logger initialized"
        );
        Ok(LoggerGuard {
            config: self.config,
        })
    }
}
