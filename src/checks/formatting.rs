//! Formatting check
//!
//! Two independent rules: the first three headings stay within H1-H3, and
//! bullet lists use a single marker character across the whole document.

use crate::checks::base::{Check, CheckContext};
use crate::models::{CheckKind, CheckResult};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Number of leading headings inspected for hierarchy
const LEADING_HEADINGS: usize = 3;
const MAX_LEADING_LEVEL: usize = 3;

static HEADING: OnceLock<Regex> = OnceLock::new();
static BULLET_LINE: OnceLock<Regex> = OnceLock::new();
static BULLET_MARKER: OnceLock<Regex> = OnceLock::new();

fn heading() -> &'static Regex {
    HEADING.get_or_init(|| Regex::new(r"(?m)^(#{1,6})\s+(.+)$").expect("valid regex"))
}

fn bullet_line() -> &'static Regex {
    BULLET_LINE.get_or_init(|| Regex::new(r"(?m)^\s*[-*+]\s*\S").expect("valid regex"))
}

fn bullet_marker() -> &'static Regex {
    BULLET_MARKER.get_or_init(|| Regex::new(r"(?m)^\s*([-+*])\s+").expect("valid regex"))
}

/// Heading levels in document order
pub fn heading_levels(content: &str) -> Vec<usize> {
    heading()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str().len()))
        .collect()
}

fn bullet_markers(content: &str) -> BTreeSet<&str> {
    bullet_marker()
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

pub struct FormattingCheck;

impl FormattingCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FormattingCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for FormattingCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Formatting
    }

    fn description(&self) -> &'static str {
        "Flags deep leading headings and mixed bullet markers"
    }

    fn check(&self, content: &str, _ctx: &CheckContext<'_>) -> CheckResult {
        let mut issues = Vec::new();

        let levels = heading_levels(content);
        if levels
            .iter()
            .take(LEADING_HEADINGS)
            .any(|level| *level > MAX_LEADING_LEVEL)
        {
            issues.push("Inconsistent header hierarchy".to_string());
        }

        if bullet_line().is_match(content) && bullet_markers(content).len() > 1 {
            issues.push("Inconsistent bullet list markers".to_string());
        }

        CheckResult::from_issues(issues)
    }
}
