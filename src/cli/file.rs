//! File command - validate a single document

use super::Workspace;
use crate::reporters::{self, OutputFormat};
use anyhow::Result;
use std::path::Path;
use std::str::FromStr;

/// Run the file command
pub fn run(workspace: &Workspace, file: &Path, format: &str) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    if !file.is_file() {
        anyhow::bail!("File not found: {}", file.display());
    }

    let result = workspace.engine.validate_file(file);
    let rendered = reporters::file_report_with_format(&result, format)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}
