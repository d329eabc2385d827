//! Documentation quality scoring
//!
//! Scores live on a 0-10 scale.
//!
//! # Scoring Formula
//!
//! ```text
//! File Score    = passed_checks / 7 × 10
//! File Passed   = File Score ≥ 7.0
//! Overall Score = files_passed / files_validated × 10   (0 for an empty corpus)
//! ```
//!
//! # Quality Labels
//!
//! - **Excellent**: overall score ≥ 9
//! - **Good**: overall score ≥ 7
//! - **Needs Improvement**: anything lower
//!
//! # Example
//!
//! A document failing only its timestamp check passes 6 of 7 checks:
//! 6 / 7 × 10 ≈ 8.57, which is still a pass.

mod doc_scorer;

pub use doc_scorer::{
    corpus_score, file_score, is_passing, CorpusTally, QualityLabel, CHECK_COUNT, PASSING_SCORE,
};
