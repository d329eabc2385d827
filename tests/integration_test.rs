//! Integration tests for the docaudit library
//!
//! These tests validate real documents written to temp directories to verify:
//! - A fully compliant change log scores 10.0 with no advice
//! - Individual defects cost exactly one check
//! - Relative links are resolved against the document's directory
//! - Corpus aggregation is deterministic and handles the empty case
//!
//! Each test uses its own isolated temp directory.

use docaudit::checks::ValidationEngineBuilder;
use docaudit::config::{load_validator_config, resolve_config};
use docaudit::{CheckKind, ValidationEngine};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PERFECT_CHANGE_LOG: &str = "# Playback Engine Change Log

**Version:** 2.0
**Last Updated:** 2024-06-01 14:30:00

## Change
Replaced the buffering strategy.

## Goal
Cut startup latency.

## Research Conducted
MCP Tool Used: Context7 for the audio API reference.

## Files Modified
- src/player.rs
- src/buffer.rs

## Testing Done
- Playback smoke test

## Result
Startup latency is down by half.

## Next Steps
- Measure on low-end devices
";

fn workspace(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    for (relative, content) in files {
        let path = dir.path().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
    dir
}

fn engine() -> ValidationEngine {
    ValidationEngineBuilder::new().workers(2).build()
}

fn paths(dir: &Path, relative: &[&str]) -> Vec<PathBuf> {
    relative.iter().map(|r| dir.join(r)).collect()
}

#[test]
fn test_perfect_change_log_scores_ten() {
    let dir = workspace(&[("2024-06-01-change-log.md", PERFECT_CHANGE_LOG)]);
    let result = engine().validate_file(&dir.path().join("2024-06-01-change-log.md"));

    assert!(result.issues.is_empty(), "unexpected issues: {:?}", result.issues);
    assert_eq!(result.score, 10.0);
    assert!(result.passed);
    assert!(result.recommendations.is_empty());
    assert_eq!(result.checks.len(), 7);
    assert!(result.checks.values().all(|c| c.passed));
}

#[test]
fn test_invalid_timestamp_costs_one_check() {
    let content = PERFECT_CHANGE_LOG.replace("2024-06-01 14:30:00", "2024-13-40 10:00");
    let dir = workspace(&[("release-change-log.md", &content)]);
    let result = engine().validate_file(&dir.path().join("release-change-log.md"));

    assert_eq!(result.issues, vec!["Invalid timestamp: 2024-13-40 10:00".to_string()]);
    assert!((result.score - 60.0 / 7.0).abs() < 1e-9);
    assert!(result.passed);
    assert_eq!(
        result.recommendations,
        vec!["Correct timestamp format to YYYY-MM-DD HH:MM:SS".to_string()]
    );
    assert!(!result.checks[&CheckKind::Timestamps].passed);
}

#[test]
fn test_relative_links_resolve_against_document_directory() {
    let guide = "# Guide\n\n**Version:** 1\n**Last Updated:** 2024-01-01 09:00\n\n\
                 See [setup](./setup.md), [home](../index.md) and [gone](../missing.md).\n\
                 External [site](https://example.com/missing.md) is never checked.\n";
    let dir = workspace(&[
        ("index.md", "# Index\n"),
        ("guides/setup.md", "# Setup\n"),
        ("guides/usage.md", guide),
    ]);
    let result = engine().validate_file(&dir.path().join("guides/usage.md"));

    assert_eq!(
        result.check(CheckKind::CrossReferences).unwrap().issues,
        vec!["Broken cross-reference: [gone](../missing.md)".to_string()]
    );
    assert_eq!(
        result.recommendations,
        vec!["Fix broken cross-references or use absolute paths".to_string()]
    );
}

#[test]
fn test_empty_document_fails_structure_only_once() {
    let dir = workspace(&[("notes.md", "")]);
    let result = engine().validate_file(&dir.path().join("notes.md"));

    assert_eq!(result.issues, vec!["File is empty".to_string()]);
    assert!(!result.checks[&CheckKind::Structure].passed);
    assert_eq!(result.passed_checks(), 6);
}

#[test]
fn test_corpus_aggregation() {
    let dir = workspace(&[
        ("a-change-log.md", PERFECT_CHANGE_LOG),
        ("b-change-log.md", "# B\n"),
        ("c-change-log.md", "# C\n"),
        ("d-change-log.md", "# D\n"),
    ]);
    let files = paths(
        dir.path(),
        &["a-change-log.md", "b-change-log.md", "c-change-log.md", "d-change-log.md"],
    );
    let corpus = engine().validate_corpus(&files);

    assert_eq!(corpus.files_validated, 4);
    assert_eq!(corpus.files_passed, 1);
    assert_eq!(corpus.files_failed, 3);
    assert_eq!(corpus.overall_score, 2.5);
    assert_eq!(
        corpus.recommendations,
        vec![
            "Overall documentation quality needs improvement. Focus on fixing validation issues."
                .to_string(),
            "3 files failed validation. Review and fix issues in these files.".to_string(),
            "Several change logs missing MCP usage documentation. Ensure all changes include MCP research details."
                .to_string(),
            "Multiple files missing required sections. Review template requirements.".to_string(),
        ]
    );
}

#[test]
fn test_corpus_is_order_independent() {
    let dir = workspace(&[
        ("x-research.md", "# X\n## Findings\n"),
        ("y.md", "- a\n* b\n"),
        ("z-current-status.md", PERFECT_CHANGE_LOG),
    ]);
    let forward = paths(dir.path(), &["x-research.md", "y.md", "z-current-status.md"]);
    let backward: Vec<PathBuf> = forward.iter().rev().cloned().collect();

    let engine = engine();
    let first = engine.validate_corpus(&forward);
    let second = engine.validate_corpus(&backward);
    assert_eq!(first.results, second.results);
    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.recommendations, second.recommendations);
}

#[test]
fn test_empty_corpus_scores_zero() {
    let corpus = engine().validate_corpus(&[]);
    assert_eq!(corpus.files_validated, 0);
    assert_eq!(corpus.overall_score, 0.0);
    assert_eq!(corpus.pass_rate(), 0.0);
    assert_eq!(
        corpus.recommendations,
        vec![
            "Overall documentation quality needs improvement. Focus on fixing validation issues."
                .to_string()
        ]
    );
}

#[test]
fn test_each_missing_section_gets_its_own_recommendation() {
    let content = "# Bare\n\n**Version:** 1.0\n**Last Updated:** 2024-06-01 14:30\n\n\
                   MCP Tool Used: Context7\n";
    let dir = workspace(&[("bare-change-log.md", content)]);
    let result = engine().validate_file(&dir.path().join("bare-change-log.md"));

    assert_eq!(result.issues.len(), 7);
    let section_advice = result
        .recommendations
        .iter()
        .filter(|r| r.as_str() == "Add missing required sections based on file type")
        .count();
    assert_eq!(section_advice, 7);
}

#[test]
fn test_unreadable_file_is_recorded_not_fatal() {
    let dir = workspace(&[("guide.md", "# Guide\n**Version:** 1\n**Last Updated:** 2024-01-01 10:00\n")]);
    let files = paths(dir.path(), &["guide.md", "vanished.md"]);
    let corpus = engine().validate_corpus(&files);

    assert_eq!(corpus.files_validated, 2);
    assert_eq!(corpus.files_passed, 1);
    let missing = dir.path().join("vanished.md").to_string_lossy().into_owned();
    let result = &corpus.results[&missing];
    assert!(!result.passed);
    assert_eq!(result.score, 0.0);
    assert!(result.issues[0].starts_with("Failed to read file: "));
}

#[test]
fn test_config_overrides_required_sections() {
    let dir = workspace(&[
        (
            "docaudit.toml",
            "[documentation.required_sections]\nchange_log = [\"Summary\"]\n",
        ),
        (
            "x-change-log.md",
            "# X\n**Version:** 1\n**Last Updated:** 2024-01-01 10:00\n## Summary\nMCP Server Used: Playwright\n",
        ),
    ]);
    let config = load_validator_config(dir.path());
    let engine = ValidationEngineBuilder::new().config(config).workers(1).build();
    let result = engine.validate_file(&dir.path().join("x-change-log.md"));
    assert!(result.issues.is_empty(), "unexpected issues: {:?}", result.issues);
}

#[test]
fn test_unavailable_config_passes_gated_checks_vacuously() {
    let dir = workspace(&[("x-change-log.md", "# X\n**Version:** 1\n**Last Updated:** 2024-01-01 10:00\n")]);
    let config = resolve_config(dir.path(), Some(&dir.path().join("missing.toml")));
    assert!(config.is_degraded());

    let engine = ValidationEngineBuilder::new().config(config).workers(1).build();
    let result = engine.validate_file(&dir.path().join("x-change-log.md"));
    assert_eq!(result.score, 10.0);
}
