//! Check command - validate every document under the root

use super::Workspace;
use crate::models::CorpusValidationResult;
use crate::reporters::{self, OutputFormat};
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the check command
pub fn run(
    workspace: &Workspace,
    format: &str,
    output: Option<&Path>,
    fail_under: Option<f64>,
    no_progress: bool,
) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let documents = workspace.documents()?;
    let show_progress = !no_progress && format == OutputFormat::Text && output.is_none();

    let result = validate_with_progress(workspace, &documents, show_progress);
    let rendered = reporters::report_with_format(&result, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            eprintln!(
                "{} Wrote {} report to {}",
                style("✓").green(),
                format,
                style(path.display()).cyan()
            );
        }
        None => print!("{}", rendered),
    }

    check_fail_threshold(fail_under, &result)
}

/// Validate the corpus, drawing a progress bar on stderr when asked
pub(super) fn validate_with_progress(
    workspace: &Workspace,
    documents: &[PathBuf],
    show_progress: bool,
) -> CorpusValidationResult {
    if !show_progress || documents.is_empty() {
        return workspace.engine.validate_corpus(documents);
    }

    let bar = ProgressBar::new(documents.len() as u64);
    bar.set_style(create_bar_style());
    bar.set_message("Validating documents...");

    let ticker = bar.clone();
    let tick = move |_file: &str, _done: usize, _total: usize| ticker.inc(1);
    let progress: &(dyn Fn(&str, usize, usize) + Send + Sync) = &tick;
    let result = workspace.engine.validate_corpus_with(documents, Some(progress));

    bar.finish_with_message(format!(
        "{}Validated {} documents",
        style("✓ ").green(),
        style(result.files_validated).cyan()
    ));
    result
}

/// Create bar progress style
fn create_bar_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .expect("valid template")
        .progress_chars("█▓▒░  ")
}

/// Fail when the overall score is below the requested threshold
fn check_fail_threshold(fail_under: Option<f64>, result: &CorpusValidationResult) -> Result<()> {
    if let Some(threshold) = fail_under {
        if result.overall_score < threshold {
            anyhow::bail!(
                "Overall score {:.1} is below the required {:.1}",
                result.overall_score,
                threshold
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn corpus(score: f64) -> CorpusValidationResult {
        CorpusValidationResult {
            timestamp: Utc::now(),
            overall_score: score,
            files_validated: 0,
            files_passed: 0,
            files_failed: 0,
            results: BTreeMap::new(),
            recommendations: Vec::new(),
            tool_usage: Vec::new(),
        }
    }

    #[test]
    fn test_fail_threshold() {
        assert!(check_fail_threshold(None, &corpus(0.0)).is_ok());
        assert!(check_fail_threshold(Some(7.0), &corpus(7.0)).is_ok());
        assert!(check_fail_threshold(Some(7.0), &corpus(6.9)).is_err());
    }
}
