//! Markdown reporter
//!
//! Produces the validation report that `docaudit report` persists as
//! `validation-report-YYYYMMDD-HHMMSS.md`.

use super::format_timestamp;
use crate::models::{CorpusValidationResult, FileValidationResult};
use crate::scoring::QualityLabel;
use chrono::{DateTime, Utc};
use std::path::Path;

/// File name the report is persisted under
pub fn report_file_name(timestamp: &DateTime<Utc>) -> String {
    format!("validation-report-{}.md", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Render the full corpus report
pub fn render(result: &CorpusValidationResult) -> String {
    let mut md = String::new();

    md.push_str(&render_header(result));
    md.push('\n');
    md.push_str(&render_summary(result));
    md.push('\n');

    md.push_str("## Detailed Results\n\n");
    for file_result in result.results.values() {
        md.push_str(&render_file_section(file_result));
    }

    if !result.tool_usage.is_empty() {
        md.push_str(&render_tool_usage(result));
        md.push('\n');
    }

    if !result.recommendations.is_empty() {
        md.push_str("## Overall Recommendations\n\n");
        for rec in &result.recommendations {
            md.push_str(&format!("- {}\n", rec));
        }
    }

    md
}

fn render_header(result: &CorpusValidationResult) -> String {
    format!(
        r#"# Documentation Validation Report

**Generated**: {}
**Files Validated**: {}
**Overall Score**: {:.1}/10
**Pass Rate**: {:.1}%
"#,
        format_timestamp(&result.timestamp),
        result.files_validated,
        result.overall_score,
        result.pass_rate()
    )
}

fn render_summary(result: &CorpusValidationResult) -> String {
    format!(
        r#"## Summary

- ✅ **Passed**: {} files
- ❌ **Failed**: {} files
- 📊 **Overall Quality**: {}
"#,
        result.files_passed,
        result.files_failed,
        QualityLabel::from_score(result.overall_score)
    )
}

/// One document's section of the report
pub fn render_file_section(result: &FileValidationResult) -> String {
    let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
    let name = Path::new(&result.file)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| result.file.clone());

    let mut md = format!("### {} - {}\n\n", status, name);
    md.push_str(&format!("- **Score**: {:.1}/10\n", result.score));
    md.push_str(&format!("- **Issues**: {}\n\n", result.issues.len()));

    if !result.issues.is_empty() {
        md.push_str("**Issues Found**:\n");
        for issue in &result.issues {
            md.push_str(&format!("- {}\n", issue));
        }
        md.push('\n');
    }

    if !result.recommendations.is_empty() {
        md.push_str("**Recommendations**:\n");
        for rec in &result.recommendations {
            md.push_str(&format!("- {}\n", rec));
        }
        md.push('\n');
    }

    md
}

fn render_tool_usage(result: &CorpusValidationResult) -> String {
    let mut md = String::from(
        r#"## Tool Usage Targets

| Server | Documents | Target | Status |
|--------|-----------|--------|--------|
"#,
    );
    for usage in &result.tool_usage {
        let status = match usage.meets_target() {
            Some(true) => "✅ Met",
            Some(false) => "⚠️ Below target",
            None => "❓ Unknown",
        };
        md.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            usage.server, usage.documents, usage.target, status
        ));
    }
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;
    use chrono::TimeZone;

    #[test]
    fn test_markdown_header() {
        let md = render(&test_report());
        assert!(md.starts_with("# Documentation Validation Report\n\n"));
        assert!(md.contains("**Generated**: 2024-06-01 14:30:00 UTC\n"));
        assert!(md.contains("**Files Validated**: 2\n"));
        assert!(md.contains("**Overall Score**: 5.0/10\n"));
        assert!(md.contains("**Pass Rate**: 50.0%\n"));
    }

    #[test]
    fn test_markdown_summary() {
        let md = render(&test_report());
        assert!(md.contains("- ✅ **Passed**: 1 files\n"));
        assert!(md.contains("- ❌ **Failed**: 1 files\n"));
        assert!(md.contains("- 📊 **Overall Quality**: Needs Improvement\n"));
    }

    #[test]
    fn test_markdown_file_sections() {
        let md = render(&test_report());
        assert!(md.contains("### ✅ PASS - guide.md\n\n- **Score**: 10.0/10\n- **Issues**: 0\n"));
        assert!(md.contains("### ❌ FAIL - 2024-06-01-change-log.md\n\n- **Score**: 5.7/10\n- **Issues**: 3\n"));
        assert!(md.contains("**Issues Found**:\n- Missing version information\n"));
        assert!(md.contains(
            "**Recommendations**:\n- Improve documentation quality to meet minimum standards\n"
        ));
        // results are keyed by path, so the change log sorts first
        let fail = md.find("❌ FAIL").unwrap();
        let pass = md.find("✅ PASS").unwrap();
        assert!(fail < pass);
    }

    #[test]
    fn test_markdown_tool_usage_and_recommendations() {
        let md = render(&test_report());
        assert!(md.contains("## Tool Usage Targets"));
        assert!(md.contains("| Brave Search | 1 | 7 | ⚠️ Below target |"));
        assert!(md.contains(
            "## Overall Recommendations\n\n- Overall documentation quality needs improvement."
        ));
        assert!(md.contains("- 1 files failed validation. Review and fix issues in these files.\n"));
    }

    #[test]
    fn test_markdown_clean_corpus_has_no_recommendations_section() {
        let mut report = test_report();
        report.recommendations.clear();
        report.tool_usage.clear();
        let md = render(&report);
        assert!(!md.contains("## Overall Recommendations"));
        assert!(!md.contains("## Tool Usage Targets"));
    }

    #[test]
    fn test_report_file_name() {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 9, 5, 3).unwrap();
        assert_eq!(report_file_name(&ts), "validation-report-20240601-090503.md");
    }
}
