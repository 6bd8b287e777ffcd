//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

/// Level filter variable; `RUST_LOG` is the fallback.
pub const LEVEL_ENV: &str = "STENCIL_LOG";

/// Output format variable (`pretty`, `compact`, `json`).
pub const FORMAT_ENV: &str = "STENCIL_LOG_FORMAT";

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup(LEVEL_ENV).or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        // Unknown formats fall back to compact
        if let Some(format) = lookup(FORMAT_ENV) {
            config.format = format.parse().unwrap_or(Format::Compact);
        }

        config.display.apply_env(&lookup);
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_owned(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
