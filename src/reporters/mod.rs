//! Output reporters for docaudit validation results
//!
//! Supports multiple output formats:
//! - `text` - Terminal output with colors
//! - `json` - Machine-readable JSON
//! - `markdown` - The persisted validation report

mod json;
mod markdown;
mod text;

use crate::error::{AuditError, AuditResult};
use crate::models::{CorpusValidationResult, FileValidationResult};
use chrono::{DateTime, Utc};
use std::str::FromStr;

pub use markdown::report_file_name;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" | "terminal" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(AuditError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

/// Render a corpus result in the specified format
pub fn report(result: &CorpusValidationResult, format: &str) -> AuditResult<String> {
    let fmt = OutputFormat::from_str(format)?;
    report_with_format(result, fmt)
}

/// Render a corpus result using an OutputFormat enum
pub fn report_with_format(
    result: &CorpusValidationResult,
    format: OutputFormat,
) -> AuditResult<String> {
    match format {
        OutputFormat::Text => Ok(text::render(result)),
        OutputFormat::Json => json::render(result),
        OutputFormat::Markdown => Ok(markdown::render(result)),
    }
}

/// Render a single document's result
pub fn file_report_with_format(
    result: &FileValidationResult,
    format: OutputFormat,
) -> AuditResult<String> {
    match format {
        OutputFormat::Text => Ok(text::render_file(result)),
        OutputFormat::Json => json::render_file(result),
        OutputFormat::Markdown => Ok(markdown::render_file_section(result)),
    }
}

/// Format a report timestamp the way every reporter shows it
pub(crate) fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format!("{} UTC", timestamp.format("%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{CheckKind, CheckResult, ToolUsage};
    use crate::config::UsageTarget;
    use chrono::TimeZone;
    use std::collections::BTreeMap;

    fn file(path: &str, failing: &[(CheckKind, &str)]) -> FileValidationResult {
        let mut checks: BTreeMap<CheckKind, CheckResult> = CheckKind::ALL
            .iter()
            .map(|k| (*k, CheckResult::pass()))
            .collect();
        let mut issues = Vec::new();
        for (kind, issue) in failing {
            checks.insert(*kind, CheckResult::from_issues(vec![issue.to_string()]));
            issues.push(issue.to_string());
        }
        let score = crate::scoring::file_score(&checks);
        FileValidationResult {
            file: path.to_string(),
            passed: crate::scoring::is_passing(score),
            recommendations: crate::recommendations::file_recommendations(score, &issues),
            score,
            checks,
            issues,
            tools_mentioned: Vec::new(),
        }
    }

    /// A two-document corpus: one clean guide, one change log failing three checks
    pub(crate) fn test_report() -> CorpusValidationResult {
        let passing = file("docs/guide.md", &[]);
        let failing = file(
            "docs/2024-06-01-change-log.md",
            &[
                (CheckKind::Structure, "Missing version information"),
                (CheckKind::RequiredSections, "Missing required section: Goal"),
                (
                    CheckKind::CrossReferences,
                    "Broken cross-reference: [setup](./setup.md)",
                ),
            ],
        );

        let results: BTreeMap<String, FileValidationResult> = [passing, failing]
            .into_iter()
            .map(|r| (r.file.clone(), r))
            .collect();

        CorpusValidationResult {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 1, 14, 30, 0).unwrap(),
            overall_score: 5.0,
            files_validated: 2,
            files_passed: 1,
            files_failed: 1,
            recommendations: crate::recommendations::corpus_recommendations(5.0, 1, &results),
            results,
            tool_usage: vec![ToolUsage {
                server: "Brave Search".into(),
                documents: 1,
                target: UsageTarget::Weekly(7),
            }],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("text").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("md").unwrap(),
            OutputFormat::Markdown
        );
        let err = OutputFormat::from_str("sarif").unwrap_err();
        assert!(matches!(err, AuditError::UnknownFormat(_)));
    }

    #[test]
    fn test_report_dispatch() {
        let corpus = test_report();
        assert!(report(&corpus, "markdown")
            .unwrap()
            .starts_with("# Documentation Validation Report"));
        assert!(report(&corpus, "json").unwrap().starts_with('{'));
        assert!(report(&corpus, "html").is_err());
    }

    #[test]
    fn test_format_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(format_timestamp(&ts), "2024-01-02 03:04:05 UTC");
    }
}
