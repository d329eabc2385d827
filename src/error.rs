//! Error types for the validation engine
//!
//! None of these abort a validation run: an unreadable document becomes a
//! per-file issue and an unavailable config degrades the rule tables.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while auditing documentation
#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Configuration unavailable ({path}): {reason}")]
    ConfigUnavailable { path: PathBuf, reason: String },

    /// Rendered verbatim as the synthetic issue on the affected file
    #[error("Failed to read file: {source}")]
    DocumentUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unknown format '{0}'. Valid formats: text, json, markdown")]
    UnknownFormat(String),

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

pub type AuditResult<T> = Result<T, AuditError>;
