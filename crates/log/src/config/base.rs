//! Core configuration types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{DisplayConfig, WriterConfig};
use crate::error::{LogError, LogResult};

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Level filter directives (e.g. `"info"`, `"warn,stencil_compiler=debug"`)
    pub level: String,

    /// Output format
    pub format: Format,

    /// Output destination
    pub writer: WriterConfig,

    /// Display configuration
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: Format::Compact,
            writer: WriterConfig::Stderr,
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Replaces the level filter.
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Parses the level filter.
    pub fn filter(&self) -> LogResult<EnvFilter> {
        EnvFilter::try_new(&self.level).map_err(|e| LogError::Filter {
            filter: self.level.clone(),
            reason: e.to_string(),
        })
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Human-readable, multi-line
    Pretty,
    /// Compact single-line output
    Compact,
    /// Structured JSON output
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Compact => write!(f, "compact"),
            Self::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pretty", Format::Pretty)]
    #[case("JSON", Format::Json)]
    #[case("compact", Format::Compact)]
    fn test_format_from_str(#[case] input: &str, #[case] expected: Format) {
        assert_eq!(input.parse::<Format>().unwrap(), expected);
        assert_eq!(expected.to_string(), input.to_lowercase());
    }

    #[test]
    fn test_unknown_format() {
        assert!("logfmt".parse::<Format>().is_err());
    }

    #[test]
    fn test_filter_parsing() {
        assert!(Config::default().with_level("warn,stencil_compiler=debug").filter().is_ok());

        let err = Config::default().with_level("stencil=notalevel").filter().unwrap_err();
        assert!(err.to_string().starts_with("invalid filter 'stencil=notalevel'"));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: Config = serde_json::from_str(r#"{"level": "debug", "format": "json"}"#).unwrap();
        assert_eq!(config.level, "debug");
        assert_eq!(config.format, Format::Json);
        assert_eq!(config.writer, WriterConfig::Stderr);
    }
}
