//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use qgen_emit::Dialect;
use qgen_ir::Program;

/// Load a program from a JSON or YAML file.
pub fn load_program(path: &str) -> Result<Program> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "yaml" | "yml" => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Invalid program file: {path}")),
        _ => serde_json::from_str(&source).with_context(|| format!("Invalid program file: {path}")),
    }
}

/// Conventional file extension for a dialect.
pub fn file_extension(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Quil => "quil",
        Dialect::Qasm => "qasm",
        Dialect::QSharp => "qs",
    }
}
