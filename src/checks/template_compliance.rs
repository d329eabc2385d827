//! Template compliance check
//!
//! Documents that contain a template marker phrase claim to follow the
//! usage-report template, whose tables need a header and at least one row.

use crate::checks::base::{Check, CheckContext};
use crate::models::{CheckKind, CheckResult};
use regex::Regex;
use std::sync::OnceLock;

/// Phrases that only appear in documents built from the report template
pub const TEMPLATE_MARKERS: &[&str] = &[
    "MCP Server Usage Summary",
    "Research Queries Conducted",
    "Library Documentation Accessed",
    "Content Extractions Performed",
];

/// Header plus one data row
const MIN_TABLE_ROWS: usize = 2;

static TABLE_ROW: OnceLock<Regex> = OnceLock::new();

fn table_row() -> &'static Regex {
    TABLE_ROW.get_or_init(|| Regex::new(r"\|.*\|.*\|").expect("valid regex"))
}

pub struct TemplateComplianceCheck;

impl TemplateComplianceCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TemplateComplianceCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for TemplateComplianceCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::TemplateCompliance
    }

    fn description(&self) -> &'static str {
        "Requires populated tables in documents that use the report template"
    }

    fn check(&self, content: &str, _ctx: &CheckContext<'_>) -> CheckResult {
        if !TEMPLATE_MARKERS.iter().any(|m| content.contains(m)) {
            return CheckResult::pass();
        }

        if table_row().find_iter(content).count() < MIN_TABLE_ROWS {
            return CheckResult::from_issues(vec![
                "Template tables appear incomplete or malformed".to_string(),
            ]);
        }

        CheckResult::pass()
    }
}
