//! Core data models for docaudit
//!
//! These models are used throughout the codebase for representing
//! documents, check outcomes, and aggregated validation results.

use crate::checks::{DocumentSource, FsSource};
use crate::config::UsageTarget;
use crate::error::AuditError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Classification of a document, driving which rules apply.
///
/// Inferred from the file name by substring match. When a name matches
/// several patterns the first one in this order wins:
/// `change-log`, `current-status`, `mcp-usage`/`mcp-integration`, `research`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    ChangeLog,
    CurrentStatus,
    McpUsage,
    Research,
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ChangeLog,
        Category::CurrentStatus,
        Category::McpUsage,
        Category::Research,
        Category::General,
    ];

    /// Infer the category from a document identifier.
    pub fn from_identifier(path: &Path) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();

        if name.contains("change-log") {
            Category::ChangeLog
        } else if name.contains("current-status") {
            Category::CurrentStatus
        } else if name.contains("mcp-usage") || name.contains("mcp-integration") {
            Category::McpUsage
        } else if name.contains("research") {
            Category::Research
        } else {
            Category::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ChangeLog => "change_log",
            Category::CurrentStatus => "current_status",
            Category::McpUsage => "mcp_usage",
            Category::Research => "research",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The seven checks, declared in evaluation order.
///
/// `Ord` follows declaration order, so a `BTreeMap<CheckKind, _>` iterates
/// in the order the checks ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Structure,
    RequiredSections,
    ToolIntegration,
    TemplateCompliance,
    CrossReferences,
    Formatting,
    Timestamps,
}

impl CheckKind {
    pub const ALL: [CheckKind; 7] = [
        CheckKind::Structure,
        CheckKind::RequiredSections,
        CheckKind::ToolIntegration,
        CheckKind::TemplateCompliance,
        CheckKind::CrossReferences,
        CheckKind::Formatting,
        CheckKind::Timestamps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Structure => "structure",
            CheckKind::RequiredSections => "required_sections",
            CheckKind::ToolIntegration => "tool_integration",
            CheckKind::TemplateCompliance => "template_compliance",
            CheckKind::CrossReferences => "cross_references",
            CheckKind::Formatting => "formatting",
            CheckKind::Timestamps => "timestamps",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        CheckKind::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown check '{}'. Valid checks: {}",
                    s,
                    CheckKind::ALL.map(|k| k.as_str()).join(", ")
                )
            })
    }
}

/// One Markdown text unit under validation
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub content: String,
    pub category: Category,
}

impl Document {
    /// Build a document, inferring its category from the path
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let category = Category::from_identifier(&path);
        Self {
            path,
            content: content.into(),
            category,
        }
    }

    /// Read a document from disk
    pub fn read(path: &Path) -> Result<Self, AuditError> {
        let content = FsSource.read(path)?;
        Ok(Self::new(path, content))
    }
}

/// Outcome of a single check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CheckResult {
    pub passed: bool,
    #[serde(default)]
    pub issues: Vec<String>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
        }
    }

    /// Any issue fails the check
    pub fn from_issues(issues: Vec<String>) -> Self {
        Self {
            passed: issues.is_empty(),
            issues,
        }
    }
}

/// Validation outcome for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileValidationResult {
    pub file: String,
    pub passed: bool,
    pub score: f64,
    #[serde(default)]
    pub checks: BTreeMap<CheckKind, CheckResult>,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Vocabulary tools this document mentions (feeds the usage table)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools_mentioned: Vec<String>,
}

impl FileValidationResult {
    /// Result for a document that could not be read
    pub fn unreadable(file: impl Into<String>, error: &AuditError) -> Self {
        Self {
            file: file.into(),
            passed: false,
            score: 0.0,
            checks: BTreeMap::new(),
            issues: vec![error.to_string()],
            recommendations: Vec::new(),
            tools_mentioned: Vec::new(),
        }
    }

    /// Number of checks that passed
    pub fn passed_checks(&self) -> usize {
        self.checks.values().filter(|c| c.passed).count()
    }

    pub fn check(&self, kind: CheckKind) -> Option<&CheckResult> {
        self.checks.get(&kind)
    }
}

/// How often a vocabulary tool appears across the corpus, against its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUsage {
    pub server: String,
    /// Number of documents mentioning the server
    pub documents: usize,
    pub target: UsageTarget,
}

impl ToolUsage {
    /// `None` when the target is unknown
    pub fn meets_target(&self) -> Option<bool> {
        match self.target {
            UsageTarget::Weekly(n) => Some(self.documents as u64 >= u64::from(n)),
            UsageTarget::Unknown => None,
        }
    }
}

/// Validation outcome for a whole corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusValidationResult {
    pub timestamp: DateTime<Utc>,
    pub overall_score: f64,
    pub files_validated: usize,
    pub files_passed: usize,
    pub files_failed: usize,
    #[serde(default)]
    pub results: BTreeMap<String, FileValidationResult>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_usage: Vec<ToolUsage>,
}

impl CorpusValidationResult {
    /// Percentage of validated files that passed (0 for an empty corpus)
    pub fn pass_rate(&self) -> f64 {
        if self.files_validated == 0 {
            0.0
        } else {
            self.files_passed as f64 / self.files_validated as f64 * 100.0
        }
    }
}
