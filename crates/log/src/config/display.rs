//! Writer and display configuration

use serde::{Deserialize, Serialize};

/// Output destination
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterConfig {
    /// Write to stderr
    #[default]
    Stderr,
    /// Write to stdout
    Stdout,
}

/// Display configuration
///
/// Independent toggles that map directly onto config-file keys.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show timestamps
    pub time: bool,
    /// Show source location (`file:line`)
    pub source: bool,
    /// Show target module
    pub target: bool,
    /// Show thread IDs
    pub thread_ids: bool,
    /// Use ANSI colors
    pub colors: bool,
    /// Flatten JSON events
    pub flatten: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            time: true,
            source: cfg!(debug_assertions),
            target: true,
            thread_ids: false,
            colors: std::io::IsTerminal::is_terminal(&std::io::stderr()),
            flatten: true,
        }
    }
}

impl DisplayConfig {
    /// Applies `NO_COLOR`, `STENCIL_LOG_TIME` and `STENCIL_LOG_SOURCE`.
    pub(super) fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.colors = false;
        }
        if let Some(v) = lookup("STENCIL_LOG_TIME") {
            self.time = v != "0" && v != "false";
        }
        if let Some(v) = lookup("STENCIL_LOG_SOURCE") {
            self.source = v != "0" && v != "false";
        }
    }
}
