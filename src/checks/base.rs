//! Base check trait and types
//!
//! This module defines the core abstractions for document validation:
//! - `Check` trait that all checks implement
//! - `CheckContext` carrying the document's path, category and config

use crate::config::ValidatorConfig;
use crate::models::{Category, CheckKind, CheckResult};
use std::path::Path;

/// Everything a check may know about a document besides its text
#[derive(Debug, Clone, Copy)]
pub struct CheckContext<'a> {
    /// Identifier of the document; relative links resolve against its parent
    pub path: &'a Path,
    pub category: Category,
    pub config: &'a ValidatorConfig,
}

impl<'a> CheckContext<'a> {
    pub fn new(path: &'a Path, category: Category, config: &'a ValidatorConfig) -> Self {
        Self {
            path,
            category,
            config,
        }
    }
}

/// Trait for all document checks
///
/// A check is a pure function of the document text and its context. It must
/// not keep state between calls, so the engine can run documents in parallel.
///
/// # Example Implementation
///
/// ```ignore
/// pub struct MyCheck;
///
/// impl Check for MyCheck {
///     fn kind(&self) -> CheckKind {
///         CheckKind::Formatting
///     }
///
///     fn description(&self) -> &'static str {
///         "Flags something"
///     }
///
///     fn check(&self, content: &str, ctx: &CheckContext<'_>) -> CheckResult {
///         CheckResult::pass()
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Which of the seven checks this is
    fn kind(&self) -> CheckKind;

    /// Unique identifier, used as the key in results
    fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Human-readable description of what this check enforces
    fn description(&self) -> &'static str;

    /// Evaluate the check against one document
    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> CheckResult;
}
