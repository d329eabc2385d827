//! Init command - write a starter docaudit.toml

use crate::config::{CONFIG_FILE_NAMES, SAMPLE_CONFIG};
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let root = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    println!("\n{} Initializing docaudit\n", style("📝").bold());

    let config_path = root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() {
        println!(
            "{} Already initialized at {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    } else {
        std::fs::write(&config_path, SAMPLE_CONFIG)
            .with_context(|| "Failed to create config file")?;
        println!(
            "{} Created {}",
            style("✓").green(),
            style(config_path.display()).cyan()
        );
    }

    println!("\nNext steps:");
    println!("  {} Check every document", style("docaudit . check").cyan());
    println!("  {} Save a Markdown report", style("docaudit . report").cyan());

    Ok(())
}
