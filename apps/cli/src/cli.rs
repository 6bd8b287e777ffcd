//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(name = "stencil", version)]
#[command(about = "Compile data-only schema descriptions and check JSON documents against them")]
pub struct Cli {
    /// Configuration file (defaults to ./stencil.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Substring marking builder names, e.g. "stencil."
    #[arg(long, global = true)]
    pub marker: Option<String>,

    /// Log every resolved invocation and chain step
    #[arg(long, global = true)]
    pub diagnostics: bool,

    /// Log filter directives, e.g. "debug" or "warn,stencil_compiler=trace"
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compile a schema and print its description
    Compile {
        /// Schema file (or - for stdin)
        schema: PathBuf,
    },

    /// Validate JSON documents against a schema
    Check {
        /// Schema file
        #[arg(short, long)]
        schema: PathBuf,

        /// Documents to validate
        #[arg(required = true)]
        documents: Vec<PathBuf>,
    },

    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}
