//! Tool integration check
//!
//! Change logs and research notes must say which external tools were used:
//! a `MCP Tool Used` / `MCP Server Used` marker, and at least one tool from
//! the configured vocabulary. Other categories pass without inspection.

use crate::checks::base::{Check, CheckContext};
use crate::models::{CheckKind, CheckResult};
use regex::Regex;
use std::sync::OnceLock;

static USAGE_MARKER: OnceLock<Regex> = OnceLock::new();

fn usage_marker() -> &'static Regex {
    USAGE_MARKER
        .get_or_init(|| Regex::new(r"(?i)MCP Tool Used|MCP Server Used").expect("valid regex"))
}

/// Vocabulary entries that appear in `content`, case-insensitively
pub fn mentioned_tools(content: &str, vocabulary: &[String]) -> Vec<String> {
    let lowered = content.to_lowercase();
    vocabulary
        .iter()
        .filter(|tool| lowered.contains(&tool.to_lowercase()))
        .cloned()
        .collect()
}

pub struct ToolIntegrationCheck;

impl ToolIntegrationCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ToolIntegrationCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ToolIntegrationCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::ToolIntegration
    }

    fn description(&self) -> &'static str {
        "Requires change logs and research notes to document the tools used"
    }

    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> CheckResult {
        if !ctx.config.requires_tool_usage(ctx.category) {
            return CheckResult::pass();
        }

        let mut issues = Vec::new();
        if !usage_marker().is_match(content) {
            issues.push("Missing MCP usage documentation in change log".to_string());
        }
        if mentioned_tools(content, &ctx.config.tool_vocabulary()).is_empty() {
            issues.push("No MCP servers documented in change log".to_string());
        }

        CheckResult::from_issues(issues)
    }
}
