//! Recommendation engine
//!
//! Maps issue text to canned remediation advice. File-level advice is
//! derived per issue; corpus-level advice escalates issues that recur in
//! more than two documents.

use crate::models::FileValidationResult;
use crate::scoring::PASSING_SCORE;
use std::collections::{BTreeMap, BTreeSet};

/// Issue must recur in more than this many files to escalate
pub const RECURRENCE_THRESHOLD: usize = 2;

pub const LOW_SCORE_ADVICE: &str = "Improve documentation quality to meet minimum standards";
pub const LOW_OVERALL_ADVICE: &str =
    "Overall documentation quality needs improvement. Focus on fixing validation issues.";

/// What kind of fix an issue calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RemediationKind {
    Sections,
    ToolIntegration,
    CrossReferences,
    Formatting,
    Timestamps,
}

impl RemediationKind {
    /// Classify an issue; first matching pattern wins
    pub fn classify(issue: &str) -> Option<Self> {
        if issue.contains("Missing required section") {
            Some(RemediationKind::Sections)
        } else if issue.contains("MCP") && issue.contains("documentation") {
            Some(RemediationKind::ToolIntegration)
        } else if issue.contains("cross-reference") {
            Some(RemediationKind::CrossReferences)
        } else if issue.contains("formatting") {
            Some(RemediationKind::Formatting)
        } else if issue.contains("timestamp") {
            Some(RemediationKind::Timestamps)
        } else {
            None
        }
    }

    /// Advice attached to a single document
    pub fn file_advice(&self) -> &'static str {
        match self {
            RemediationKind::Sections => "Add missing required sections based on file type",
            RemediationKind::ToolIntegration => {
                "Document MCP server usage for research and implementation"
            }
            RemediationKind::CrossReferences => "Fix broken cross-references or use absolute paths",
            RemediationKind::Formatting => "Fix markdown formatting inconsistencies",
            RemediationKind::Timestamps => "Correct timestamp format to YYYY-MM-DD HH:MM:SS",
        }
    }

    /// Advice for an issue recurring across the corpus, if this kind escalates
    pub fn corpus_advice(&self) -> Option<&'static str> {
        match self {
            RemediationKind::Sections => {
                Some("Multiple files missing required sections. Review template requirements.")
            }
            RemediationKind::ToolIntegration => Some(
                "Several change logs missing MCP usage documentation. Ensure all changes include MCP research details.",
            ),
            RemediationKind::CrossReferences => {
                Some("Multiple broken cross-references found. Verify all internal links.")
            }
            RemediationKind::Formatting | RemediationKind::Timestamps => None,
        }
    }
}

/// Recommendations for one document: one entry per classified issue, in
/// issue order
pub fn file_recommendations(score: f64, issues: &[String]) -> Vec<String> {
    let mut recommendations = Vec::new();
    if score < PASSING_SCORE {
        recommendations.push(LOW_SCORE_ADVICE.to_string());
    }

    recommendations.extend(
        issues
            .iter()
            .filter_map(|issue| RemediationKind::classify(issue))
            .map(|kind| kind.file_advice().to_string()),
    );
    recommendations
}

/// Recommendations for a whole corpus
///
/// `results` must iterate in a stable order for the escalations to be
/// deterministic; a `BTreeMap` keyed by file gives that.
pub fn corpus_recommendations(
    overall_score: f64,
    files_failed: usize,
    results: &BTreeMap<String, FileValidationResult>,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if overall_score < PASSING_SCORE {
        recommendations.push(LOW_OVERALL_ADVICE.to_string());
    }
    if files_failed > 0 {
        recommendations.push(format!(
            "{} files failed validation. Review and fix issues in these files.",
            files_failed
        ));
    }

    // Count each issue text once per file
    let mut occurrences: BTreeMap<&str, usize> = BTreeMap::new();
    for result in results.values() {
        let distinct: BTreeSet<&str> = result.issues.iter().map(String::as_str).collect();
        for issue in distinct {
            *occurrences.entry(issue).or_default() += 1;
        }
    }

    let mut escalated = BTreeSet::new();
    for (issue, count) in occurrences {
        if count <= RECURRENCE_THRESHOLD {
            continue;
        }
        let Some(kind) = RemediationKind::classify(issue) else {
            continue;
        };
        if let Some(advice) = kind.corpus_advice() {
            if escalated.insert(kind) {
                recommendations.push(advice.to_string());
            }
        }
    }

    recommendations
}
