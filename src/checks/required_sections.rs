//! Required sections check
//!
//! Looks up the section names required for the document's category and
//! expects a level-2 heading starting with each one (case-insensitive).

use crate::checks::base::{Check, CheckContext};
use crate::models::{CheckKind, CheckResult};
use regex::RegexBuilder;

pub struct RequiredSectionsCheck;

impl RequiredSectionsCheck {
    pub fn new() -> Self {
        Self
    }

    fn has_section(content: &str, section: &str) -> bool {
        RegexBuilder::new(&format!(r"^##\s+{}", regex::escape(section)))
            .multi_line(true)
            .case_insensitive(true)
            .build()
            .map(|re| re.is_match(content))
            .unwrap_or(false)
    }
}

impl Default for RequiredSectionsCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for RequiredSectionsCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::RequiredSections
    }

    fn description(&self) -> &'static str {
        "Requires the level-2 sections defined for the document's category"
    }

    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> CheckResult {
        let issues = ctx
            .config
            .required_sections(ctx.category)
            .into_iter()
            .filter(|section| !Self::has_section(content, section))
            .map(|section| format!("Missing required section: {}", section))
            .collect();

        CheckResult::from_issues(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::base::test_support::{run, run_with};
    use crate::config::ValidatorConfig;

    #[test]
    fn test_change_log_without_headings_misses_all_seven() {
        let result = run(
            &RequiredSectionsCheck::new(),
            "2024-06-01-change-log.md",
            "# Title\nNo sections here.\n",
        );
        assert!(!result.passed);
        assert_eq!(result.issues.len(), 7);
        assert_eq!(result.issues[0], "Missing required section: Change");
        assert_eq!(result.issues[6], "Missing required section: Next Steps");
    }

    #[test]
    fn test_prefix_and_case_insensitive_match() {
        let result = run(
            &RequiredSectionsCheck::new(),
            "audio-research.md",
            "## research questions we asked\n## METHODOLOGY\n## Findings (draft)\n## Implementation\n",
        );
        assert!(result.passed, "unexpected issues: {:?}", result.issues);
    }

    #[test]
    fn test_level_three_heading_does_not_count() {
        let result = run(
            &RequiredSectionsCheck::new(),
            "audio-research.md",
            "## Research Questions\n### Methodology\n## Findings\n## Implementation\n",
        );
        assert_eq!(
            result.issues,
            vec!["Missing required section: Methodology".to_string()]
        );
    }

    #[test]
    fn test_section_names_are_escaped() {
        let mut config = ValidatorConfig::default();
        config
            .documentation
            .required_sections
            .insert("general".into(), vec!["Q&A (v2.0)".into()]);
        let result = run_with(
            &RequiredSectionsCheck::new(),
            "notes.md",
            "## Q&A (v2.0)\n",
            &config,
        );
        assert!(result.passed);
        let result = run_with(&RequiredSectionsCheck::new(), "notes.md", "## Q&A v2x0\n", &config);
        assert!(!result.passed);
    }

    #[test]
    fn test_general_documents_always_pass() {
        let result = run(&RequiredSectionsCheck::new(), "guide.md", "");
        assert!(result.passed);
    }

    #[test]
    fn test_unavailable_config_passes_vacuously() {
        let config = ValidatorConfig::unavailable();
        let result = run_with(
            &RequiredSectionsCheck::new(),
            "change-log.md",
            "nothing",
            &config,
        );
        assert!(result.passed);
    }
}
