//! Report command - render and persist the Markdown validation report

use super::Workspace;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use std::path::{Path, PathBuf};

/// Run the report command
pub fn run(workspace: &Workspace, output_dir: Option<&Path>) -> Result<()> {
    let documents = workspace.documents()?;
    let result = workspace.engine.validate_corpus(&documents);
    let report = reporters::report_with_format(&result, OutputFormat::Markdown)?;

    let dir = output_dir.map(Path::to_path_buf).unwrap_or_else(|| workspace.root.clone());
    let report_path = write_report(&dir, &reporters::report_file_name(&result.timestamp), &report)?;

    eprintln!(
        "{} Validation report saved to: {}",
        style("✓").green(),
        style(report_path.display()).cyan()
    );
    print!("{}", report);
    Ok(())
}

fn write_report(dir: &Path, name: &str, report: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create report directory {}", dir.display()))?;
    let path = dir.join(name);
    std::fs::write(&path, report)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(path)
}
