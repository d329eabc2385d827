//! Per-file and per-corpus scorer

use crate::models::{CheckKind, CheckResult, FileValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Minimum score for a document (or a corpus) to count as passing
pub const PASSING_SCORE: f64 = 7.0;

/// Number of checks every readable document goes through
pub const CHECK_COUNT: usize = CheckKind::ALL.len();

const MAX_SCORE: f64 = 10.0;
const EXCELLENT_SCORE: f64 = 9.0;

/// Score a document from its check results
pub fn file_score(checks: &BTreeMap<CheckKind, CheckResult>) -> f64 {
    let passed = checks.values().filter(|c| c.passed).count();
    passed as f64 / CHECK_COUNT as f64 * MAX_SCORE
}

pub fn is_passing(score: f64) -> bool {
    score >= PASSING_SCORE
}

/// Score a corpus from its pass counts
pub fn corpus_score(files_passed: usize, files_validated: usize) -> f64 {
    if files_validated == 0 {
        return 0.0;
    }
    files_passed as f64 / files_validated as f64 * MAX_SCORE
}

/// Human-readable quality band for an overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityLabel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl QualityLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_SCORE {
            QualityLabel::Excellent
        } else if score >= PASSING_SCORE {
            QualityLabel::Good
        } else {
            QualityLabel::NeedsImprovement
        }
    }
}

impl std::fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityLabel::Excellent => write!(f, "Excellent"),
            QualityLabel::Good => write!(f, "Good"),
            QualityLabel::NeedsImprovement => write!(f, "Needs Improvement"),
        }
    }
}

/// Running pass/fail counts over a corpus
///
/// Adding results is commutative, so the tally does not depend on the
/// order documents were validated in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusTally {
    pub validated: usize,
    pub passed: usize,
    pub failed: usize,
}

impl CorpusTally {
    pub fn add(&mut self, result: &FileValidationResult) {
        self.validated += 1;
        if result.passed {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn overall_score(&self) -> f64 {
        let score = corpus_score(self.passed, self.validated);
        debug!(
            "Corpus score: {}/{} passed -> {:.2}",
            self.passed, self.validated, score
        );
        score
    }
}

impl<'a> FromIterator<&'a FileValidationResult> for CorpusTally {
    fn from_iter<I: IntoIterator<Item = &'a FileValidationResult>>(iter: I) -> Self {
        let mut tally = CorpusTally::default();
        for result in iter {
            tally.add(result);
        }
        tally
    }
}
