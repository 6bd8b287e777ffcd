//! Compiler configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable overriding the invocation marker.
pub const MARKER_ENV: &str = "STENCIL_MARKER";

/// Marker used when none is configured.
pub const DEFAULT_MARKER: &str = "stencil.";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An empty marker would make every string an invocation name.
    #[error("invocation marker must not be empty")]
    EmptyMarker,
}

/// Settings for a [`Compiler`](crate::Compiler).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerConfig {
    /// Substring identifying a string as a builder name, e.g. `stencil.`.
    pub marker: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_owned(),
        }
    }
}

impl CompilerConfig {
    /// Defaults, with the marker taken from `STENCIL_MARKER` when set.
    #[must_use]
    pub fn from_env() -> Self {
        match std::env::var(MARKER_ENV) {
            Ok(marker) if !marker.is_empty() => Self { marker },
            _ => Self::default(),
        }
    }

    /// Sets the marker.
    #[must_use]
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Checks the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        Ok(())
    }

    /// The chain literal that switches into shape compilation.
    #[must_use]
    pub fn shape_marker(&self) -> String {
        format!("{}shape", self.marker)
    }
}
