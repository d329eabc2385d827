//! Text (terminal) reporter with colors and formatting

use super::format_timestamp;
use crate::models::{CorpusValidationResult, FileValidationResult};
use crate::scoring::{QualityLabel, PASSING_SCORE};

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Maximum issues listed per document before truncating
const MAX_ISSUES_SHOWN: usize = 5;

/// Render report as formatted terminal output
pub fn render(result: &CorpusValidationResult) -> String {
    let mut out = String::new();

    let quality = QualityLabel::from_score(result.overall_score);
    out.push_str(&format!("\n{BOLD}Documentation Validation{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Score: {}  Quality: {BOLD}{}{RESET}  ",
        format_score(result.overall_score),
        quality
    ));
    out.push_str(&format!(
        "Files: {}  Passed: {GREEN}{}{RESET}  Failed: {RED}{}{RESET}  Pass rate: {:.1}%\n",
        result.files_validated,
        result.files_passed,
        result.files_failed,
        result.pass_rate()
    ));
    out.push_str(&format!(
        "{DIM}Generated {}{RESET}\n\n",
        format_timestamp(&result.timestamp)
    ));

    if result.results.is_empty() {
        out.push_str(&format!("{DIM}No documents found.{RESET}\n"));
        return out;
    }

    out.push_str(&format!("{BOLD}DOCUMENTS{RESET}\n"));
    for file in result.results.values() {
        out.push_str(&render_file_line(file));
        for issue in file.issues.iter().take(MAX_ISSUES_SHOWN) {
            out.push_str(&format!("        {DIM}- {}{RESET}\n", issue));
        }
        let remaining = file.issues.len().saturating_sub(MAX_ISSUES_SHOWN);
        if remaining > 0 {
            out.push_str(&format!("        {DIM}...and {} more{RESET}\n", remaining));
        }
    }
    out.push('\n');

    if !result.tool_usage.is_empty() {
        out.push_str(&format!("{BOLD}TOOL USAGE{RESET}\n"));
        for usage in &result.tool_usage {
            let marker = match usage.meets_target() {
                Some(true) => format!("{GREEN}met{RESET}"),
                Some(false) => format!("{YELLOW}below{RESET}"),
                None => format!("{DIM}unknown{RESET}"),
            };
            out.push_str(&format!(
                "  {:<24} {:>3} / {:<8} {}\n",
                usage.server,
                usage.documents,
                usage.target.to_string(),
                marker
            ));
        }
        out.push('\n');
    }

    if !result.recommendations.is_empty() {
        out.push_str(&format!("{BOLD}RECOMMENDATIONS{RESET}\n"));
        for rec in &result.recommendations {
            out.push_str(&format!("  • {}\n", rec));
        }
    }

    out
}

/// Render one document's result with all of its issues
pub fn render_file(result: &FileValidationResult) -> String {
    let mut out = render_file_line(result);
    for (kind, check) in &result.checks {
        let status = if check.passed {
            format!("{GREEN}ok{RESET}")
        } else {
            format!("{RED}failed{RESET}")
        };
        out.push_str(&format!("  {:<20} {}\n", kind.as_str(), status));
        for issue in &check.issues {
            out.push_str(&format!("        {DIM}- {}{RESET}\n", issue));
        }
    }
    // Unreadable documents have no checks, only the read failure
    if result.checks.is_empty() {
        for issue in &result.issues {
            out.push_str(&format!("        {DIM}- {}{RESET}\n", issue));
        }
    }
    if !result.recommendations.is_empty() {
        out.push('\n');
        for rec in &result.recommendations {
            out.push_str(&format!("  • {}\n", rec));
        }
    }
    out
}

fn render_file_line(result: &FileValidationResult) -> String {
    let status = if result.passed {
        format!("{GREEN}PASS{RESET}")
    } else {
        format!("{RED}FAIL{RESET}")
    };
    format!(
        "  {}  {}  {}\n",
        status,
        format_score(result.score),
        result.file
    )
}

/// Format score with color
fn format_score(score: f64) -> String {
    let color = if score >= 9.0 {
        GREEN
    } else if score >= PASSING_SCORE {
        YELLOW
    } else {
        RED
    };
    format!("{color}{:>4.1}/10{RESET}", score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporters::tests::test_report;

    #[test]
    fn test_text_render_header() {
        let out = render(&test_report());
        assert!(out.contains("Documentation Validation"));
        assert!(out.contains("Needs Improvement"));
        assert!(out.contains("Pass rate: 50.0%"));
    }

    #[test]
    fn test_text_render_lists_documents_and_issues() {
        let out = render(&test_report());
        assert!(out.contains("docs/guide.md"));
        assert!(out.contains("docs/2024-06-01-change-log.md"));
        assert!(out.contains("- Missing required section: Goal"));
        assert!(out.contains("RECOMMENDATIONS"));
        assert!(out.contains("TOOL USAGE"));
    }

    #[test]
    fn test_text_render_empty_corpus() {
        let mut report = test_report();
        report.results.clear();
        let out = render(&report);
        assert!(out.contains("No documents found."));
    }

    #[test]
    fn test_text_render_file_shows_every_check() {
        let report = test_report();
        let out = render_file(&report.results["docs/2024-06-01-change-log.md"]);
        assert!(out.contains("FAIL"));
        assert!(out.contains("structure"));
        assert!(out.contains("timestamps"));
        assert!(out.contains("- Broken cross-reference: [setup](./setup.md)"));
    }
}
