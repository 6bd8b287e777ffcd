//! Layered settings: defaults, then `stencil.toml`, then environment, then flags.

use std::path::{Path, PathBuf};

use anyhow::Context;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use stencil_compiler::CompilerConfig;

use crate::cli::Cli;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "stencil.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub compiler: CompilerConfig,
    pub log: stencil_log::Config,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            compiler: CompilerConfig::default(),
            log: stencil_log::Config::default().with_level("warn"),
        }
    }
}

impl Settings {
    /// Loads settings for this invocation.
    pub fn load(cli: &Cli) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        match &cli.config {
            Some(path) => {
                anyhow::ensure!(path.exists(), "config file {} does not exist", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        figment = figment
            .merge(env_key("RUST_LOG", "log.level"))
            .merge(env_key(stencil_log::LEVEL_ENV, "log.level"))
            .merge(env_key(stencil_log::FORMAT_ENV, "log.format"))
            .merge(env_key(stencil_compiler::config::MARKER_ENV, "compiler.marker"));

        let mut settings: Self = figment.extract().context("invalid configuration")?;

        if let Some(marker) = &cli.marker {
            settings.compiler.marker.clone_from(marker);
        }
        if let Some(level) = &cli.log_level {
            settings.log.level.clone_from(level);
        }
        settings.compiler.validate().context("invalid compiler configuration")?;
        Ok(settings)
    }

    /// Where the settings file was read from, if anywhere.
    #[must_use]
    pub fn source(cli: &Cli) -> Option<PathBuf> {
        cli.config
            .clone()
            .or_else(|| Path::new(DEFAULT_CONFIG_FILE).exists().then(|| DEFAULT_CONFIG_FILE.into()))
    }
}

/// Reads a single environment variable into a nested settings key.
fn env_key(var: &'static str, key: &'static str) -> Env {
    Env::raw().only(&[var]).map(move |_| key.into())
}
