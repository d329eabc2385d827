//! JSON reporter
//!
//! Outputs the full CorpusValidationResult as pretty-printed JSON.
//! Useful for machine consumption, piping to jq, or further processing.

use crate::error::AuditResult;
use crate::models::{CorpusValidationResult, FileValidationResult};

/// Render report as JSON
pub fn render(result: &CorpusValidationResult) -> AuditResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a single document's result as JSON
pub fn render_file(result: &FileValidationResult) -> AuditResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
