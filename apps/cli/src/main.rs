//! Stencil CLI entry point.

mod cli;
mod commands;
mod settings;

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use stencil_compiler::{Compiler, set_diagnostics};

use crate::cli::{Cli, Command};
use crate::settings::Settings;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if let Command::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "stencil", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let settings = Settings::load(&cli)?;
    let _guard = stencil_log::init_with(settings.log.clone()).context("failed to initialize logging")?;
    if let Some(path) = Settings::source(&cli) {
        tracing::debug!(config = %path.display(), "loaded configuration file");
    }

    set_diagnostics(cli.diagnostics);
    let compiler = Compiler::builder().config(settings.compiler).build()?;

    match &cli.command {
        Command::Compile { schema } => commands::compile(&compiler, schema),
        Command::Check { schema, documents } => commands::check(&compiler, schema, documents),
        Command::Completions { .. } => Ok(ExitCode::SUCCESS),
    }
}
