//! Structure check
//!
//! Every document needs an H1 title, a `**Version:**` line and a
//! `**Last Updated:**` line. An empty document reports only that it is empty.

use crate::checks::base::{Check, CheckContext};
use crate::models::{CheckKind, CheckResult};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

static TITLE_PATTERN: OnceLock<Regex> = OnceLock::new();
static VERSION_PATTERN: OnceLock<Regex> = OnceLock::new();
static UPDATED_PATTERN: OnceLock<Regex> = OnceLock::new();

fn title_pattern() -> &'static Regex {
    TITLE_PATTERN.get_or_init(|| Regex::new(r"(?m)^#\s+").expect("valid regex"))
}

fn version_pattern() -> &'static Regex {
    VERSION_PATTERN.get_or_init(|| Regex::new(r"(?m)^\*\*Version:\*\*\s+").expect("valid regex"))
}

fn updated_pattern() -> &'static Regex {
    UPDATED_PATTERN
        .get_or_init(|| Regex::new(r"(?m)^\*\*Last Updated:\*\*\s+").expect("valid regex"))
}

pub struct StructureCheck;

impl StructureCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StructureCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for StructureCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Structure
    }

    fn description(&self) -> &'static str {
        "Requires a main title, version information and a last-updated line"
    }

    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> CheckResult {
        if content.trim().is_empty() {
            debug!("{} is empty", ctx.path.display());
            return CheckResult::from_issues(vec!["File is empty".to_string()]);
        }

        let mut issues = Vec::new();
        if !title_pattern().is_match(content) {
            issues.push("Missing main title (H1)".to_string());
        }
        if !version_pattern().is_match(content) {
            issues.push("Missing version information".to_string());
        }
        if !updated_pattern().is_match(content) {
            issues.push("Missing last updated timestamp".to_string());
        }

        CheckResult::from_issues(issues)
    }
}
