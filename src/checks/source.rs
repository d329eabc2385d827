//! Document source abstraction for the validation engine.
//!
//! The engine never touches the filesystem directly to load document text;
//! it asks a `DocumentSource`. This keeps reads mockable in tests and gives
//! one place where I/O failures turn into `AuditError::DocumentUnreadable`.

use crate::error::AuditError;
use std::path::Path;

/// Supplies document text by identifier.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// rayon's parallel corpus run.
pub trait DocumentSource: Send + Sync {
    /// Read the full text of a document.
    fn read(&self, path: &Path) -> Result<String, AuditError>;
}

/// Reads documents from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl DocumentSource for FsSource {
    fn read(&self, path: &Path) -> Result<String, AuditError> {
        std::fs::read_to_string(path).map_err(|source| AuditError::DocumentUnreadable {
            path: path.to_path_buf(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Test-only mock
// ---------------------------------------------------------------------------

#[cfg(test)]
pub struct MockSource {
    contents: std::collections::HashMap<std::path::PathBuf, String>,
}

#[cfg(test)]
impl MockSource {
    /// Build a mock from `(path, content)` pairs. Any other path is unreadable.
    pub fn new(entries: Vec<(&str, &str)>) -> Self {
        Self {
            contents: entries
                .into_iter()
                .map(|(path, body)| (std::path::PathBuf::from(path), body.to_string()))
                .collect(),
        }
    }
}

#[cfg(test)]
impl DocumentSource for MockSource {
    fn read(&self, path: &Path) -> Result<String, AuditError> {
        self.contents
            .get(path)
            .cloned()
            .ok_or_else(|| AuditError::DocumentUnreadable {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
            })
    }
}
