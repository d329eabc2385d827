//! Cross-reference check
//!
//! Inline links whose target starts with `./` or `../` are resolved against
//! the document's directory and must exist on disk. Anything else (absolute
//! paths, URLs, anchors) is left alone.
//!
//! The document's directory is canonicalized first when it exists, so `..`
//! steps out of the symlink target rather than the link's parent. The rest
//! of the target is normalized lexically.

use crate::checks::base::{Check, CheckContext};
use crate::models::{CheckKind, CheckResult};
use regex::Regex;
use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

static LINK_PATTERN: OnceLock<Regex> = OnceLock::new();

fn link_pattern() -> &'static Regex {
    LINK_PATTERN.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"))
}

/// A Markdown inline link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    pub text: &'a str,
    pub target: &'a str,
}

impl Link<'_> {
    pub fn is_relative(&self) -> bool {
        self.target.starts_with("./") || self.target.starts_with("../")
    }
}

/// All inline links, in document order
pub fn extract_links(content: &str) -> Vec<Link<'_>> {
    link_pattern()
        .captures_iter(content)
        .filter_map(|caps| {
            Some(Link {
                text: caps.get(1)?.as_str(),
                target: caps.get(2)?.as_str(),
            })
        })
        .collect()
}

/// Lexically resolve `.` and `..` components
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let popped = match out.components().next_back() {
                    Some(Component::Normal(_)) => out.pop(),
                    _ => false,
                };
                if !popped && !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve a relative link target against the document that contains it
pub fn resolve_link(document: &Path, target: &str) -> PathBuf {
    let parent = document.parent().unwrap_or_else(|| Path::new(""));
    let base = match parent.canonicalize() {
        Ok(real) => real,
        Err(_) => parent.to_path_buf(),
    };
    normalize_path(&base.join(target))
}

pub struct CrossReferencesCheck;

impl CrossReferencesCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CrossReferencesCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for CrossReferencesCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::CrossReferences
    }

    fn description(&self) -> &'static str {
        "Requires relative links to point at files that exist"
    }

    fn check(&self, content: &str, ctx: &CheckContext<'_>) -> CheckResult {
        let mut issues = Vec::new();

        for link in extract_links(content).into_iter().filter(Link::is_relative) {
            let resolved = resolve_link(ctx.path, link.target);
            // Probe errors count as broken too
            let exists = resolved.try_exists().unwrap_or(false);
            if !exists {
                debug!(
                    "{}: link {} resolved to missing {}",
                    ctx.path.display(),
                    link.target,
                    resolved.display()
                );
                issues.push(format!(
                    "Broken cross-reference: [{}]({})",
                    link.text, link.target
                ));
            }
        }

        CheckResult::from_issues(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::base::test_support::run;

    #[test]
    fn test_extract_links() {
        let links = extract_links("See [setup](./setup.md) and [site](https://example.com).");
        assert_eq!(
            links,
            vec![
                Link {
                    text: "setup",
                    target: "./setup.md"
                },
                Link {
                    text: "site",
                    target: "https://example.com"
                },
            ]
        );
        assert!(links[0].is_relative());
        assert!(!links[1].is_relative());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(
            normalize_path(Path::new("docs/guides/../api/./index.md")),
            PathBuf::from("docs/api/index.md")
        );
        assert_eq!(
            normalize_path(Path::new("docs/../../up.md")),
            PathBuf::from("../up.md")
        );
        assert_eq!(normalize_path(Path::new("/a/../../b")), PathBuf::from("/b"));
    }

    #[test]
    fn test_existing_relative_links_pass() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("guides")).unwrap();
        std::fs::write(dir.path().join("index.md"), "# Index").unwrap();
        std::fs::write(dir.path().join("guides/setup.md"), "# Setup").unwrap();
        let doc = dir.path().join("guides/usage.md");

        let result = run(
            &CrossReferencesCheck::new(),
            doc.to_str().unwrap(),
            "[setup](./setup.md) and [home](../index.md)",
        );
        assert!(result.passed, "unexpected issues: {:?}", result.issues);
    }

    #[test]
    fn test_missing_parent_link_is_broken() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("guides")).unwrap();
        // a file with the same name elsewhere does not satisfy the link
        std::fs::write(dir.path().join("guides/missing.md"), "# Elsewhere").unwrap();
        let doc = dir.path().join("guides/usage.md");

        let result = run(
            &CrossReferencesCheck::new(),
            doc.to_str().unwrap(),
            "[x](../missing.md)",
        );
        assert_eq!(
            result.issues,
            vec!["Broken cross-reference: [x](../missing.md)".to_string()]
        );
    }

    #[test]
    fn test_resolve_link_without_directory_on_disk_is_lexical() {
        assert_eq!(
            resolve_link(Path::new("no-such-dir/guides/usage.md"), "../index.md"),
            PathBuf::from("no-such-dir/index.md")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_parent_link_follows_symlinked_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("real/sub")).unwrap();
        std::fs::write(dir.path().join("real/shared.md"), "# Shared").unwrap();
        std::os::unix::fs::symlink(dir.path().join("real/sub"), dir.path().join("alias")).unwrap();
        let doc = dir.path().join("alias/doc.md");

        let result = run(
            &CrossReferencesCheck::new(),
            doc.to_str().unwrap(),
            "[shared](../shared.md)",
        );
        assert!(result.passed, "unexpected issues: {:?}", result.issues);
    }

    #[test]
    fn test_non_relative_links_are_never_checked() {
        let result = run(
            &CrossReferencesCheck::new(),
            "/nonexistent/dir/doc.md",
            "[a](https://example.com/x.md) [b](/abs/missing.md) [c](missing.md) [d](#anchor)",
        );
        assert!(result.passed);
    }

    #[test]
    fn test_each_broken_link_reported() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("doc.md");
        let result = run(
            &CrossReferencesCheck::new(),
            doc.to_str().unwrap(),
            "[one](./one.md)\n[two](./two.md)\n",
        );
        assert_eq!(result.issues.len(), 2);
        assert!(!result.passed);
    }
}
