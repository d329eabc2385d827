//! Document discovery for the CLI commands.
//!
//! Walks the documentation root respecting `.gitignore`, keeps Markdown
//! files, and drops the root README, virtual-environment trees and any
//! configured exclusions.

use crate::config::ValidatorConfig;
use anyhow::{Context, Result};
use ignore::WalkBuilder;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

const DOCUMENT_EXTENSION: &str = "md";
const ROOT_INDEX: &str = "README.md";
const VENV_MARKER: &str = "venv";

/// Collect the Markdown documents under `root`, sorted by path
pub(super) fn collect_documents(root: &Path, config: &ValidatorConfig) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        anyhow::bail!("Path is not a directory: {}", root.display());
    }

    let mut files = Vec::new();
    let walker = WalkBuilder::new(root)
        .hidden(true)
        .git_ignore(true)
        .git_global(false)
        .git_exclude(true)
        .build();

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root.display()))?;
        let path = entry.path();
        if !path.is_file() || !is_markdown(path) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if is_skipped(relative) {
            debug!("Skipping {}", relative.display());
            continue;
        }
        if config.should_exclude(relative) {
            debug!("Excluded by config: {}", relative.display());
            continue;
        }
        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(DOCUMENT_EXTENSION))
        .unwrap_or(false)
}

/// Root README and anything inside a virtual environment
fn is_skipped(relative: &Path) -> bool {
    if relative == Path::new(ROOT_INDEX) {
        return true;
    }
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_string_lossy().contains(VENV_MARKER),
        _ => false,
    })
}
