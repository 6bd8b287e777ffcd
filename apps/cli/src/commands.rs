//! Subcommand implementations.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use serde_json::Value;
use stencil_compiler::{Compiler, Node, Term};
use stencil_validator::foundation::ValidationErrors;
use stencil_validator::schema::Schema;

/// Reads and decodes a JSON file; `-` reads stdin.
fn read_json(path: &Path) -> anyhow::Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn load_schema(compiler: &Compiler, path: &Path) -> anyhow::Result<Term> {
    let value = read_json(path)?;
    let node = Node::try_from(value).with_context(|| format!("failed to decode {}", path.display()))?;
    tracing::info!(schema = %path.display(), "compiling schema");
    compiler
        .transform(&node)
        .with_context(|| format!("failed to compile {}", path.display()))
}

pub fn compile(compiler: &Compiler, path: &Path) -> anyhow::Result<ExitCode> {
    let description = match load_schema(compiler, path)? {
        Term::Schema(schema) => schema.describe(),
        other => serde_json::json!({ "kind": other.kind() }),
    };
    println!("{}", serde_json::to_string_pretty(&description)?);
    Ok(ExitCode::SUCCESS)
}

pub fn check(compiler: &Compiler, schema: &Path, documents: &[PathBuf]) -> anyhow::Result<ExitCode> {
    let schema: Schema = load_schema(compiler, schema)?
        .into_schema()
        .with_context(|| format!("{} does not describe a validator", schema.display()))?;

    let mut failures = 0usize;
    for document in documents {
        let value = read_json(document)?;
        match schema.validate(&value) {
            Ok(()) => println!("{}: ok", document.display()),
            Err(error) => {
                failures += 1;
                println!("{}: invalid", document.display());
                let leaves: ValidationErrors = error
                    .flatten()
                    .into_iter()
                    .filter(|e| !e.has_nested())
                    .cloned()
                    .collect();
                tracing::debug!(document = %document.display(), errors = leaves.len(), "document rejected");
                for leaf in leaves.errors() {
                    let field = leaf.field.as_deref().unwrap_or("<root>");
                    println!("  {field}: {} ({})", leaf.message, leaf.code);
                }
            }
        }
    }

    tracing::info!(documents = documents.len(), failures, "check finished");
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
