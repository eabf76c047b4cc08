//! Render command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use qgen_emit::{Dialect, Render};
use tracing::info;

use super::common::{file_extension, load_program};
use crate::config::CliConfig;

/// Execute the render command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    dialect: Option<&str>,
    config: &CliConfig,
) -> Result<()> {
    let dialect = config.resolve_dialect(dialect)?;
    let program = load_program(input)?;
    info!(
        input,
        %dialect,
        operations = program.len(),
        qubits = program.num_qubits(),
        "Loaded program"
    );

    let code = program
        .render(dialect)
        .with_context(|| format!("Failed to render {input} as {dialect}"))?;

    let output_path = match output {
        Some(path) => Some(PathBuf::from(path)),
        None => config
            .output_dir
            .as_deref()
            .map(|dir| output_path_for(input, dir, dialect)),
    };

    match output_path {
        Some(path) => {
            fs::write(&path, format!("{code}\n"))
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
            eprintln!(
                "{} Rendered {} as {} to {}",
                style("✓").green().bold(),
                style(input).green(),
                style(dialect).yellow(),
                style(path.display()).green()
            );
        }
        None => println!("{code}"),
    }

    Ok(())
}

/// File in `dir` named after the input's stem with the dialect's extension.
/// Dots inside the stem are kept (`bell.v2.json` -> `bell.v2.qasm`).
fn output_path_for(input: &str, dir: &Path, dialect: Dialect) -> PathBuf {
    let stem = Path::new(input).file_stem().unwrap_or_default();
    dir.join(format!("{}.{}", stem.to_string_lossy(), file_extension(dialect)))
}
