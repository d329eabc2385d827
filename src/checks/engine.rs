//! Validation engine with parallel corpus support
//!
//! The ValidationEngine runs every registered check against documents:
//! - Evaluates the seven checks in fixed order for one document
//! - Scores the document and derives its recommendations
//! - Validates a corpus in parallel using rayon
//! - Reports progress through callbacks
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                   ValidationEngine                      │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. Read each document through the DocumentSource       │
//! │  2. Run all checks in order (no early exit)             │
//! │  3. Score, flatten issues, derive recommendations       │
//! │  4. Reduce file results into the corpus result          │
//! └─────────────────────────────────────────────────────────┘
//! ```

use crate::checks::base::{Check, CheckContext};
use crate::checks::source::{DocumentSource, FsSource};
use crate::checks::tool_integration::mentioned_tools;
use crate::config::ValidatorConfig;
use crate::models::{CorpusValidationResult, Document, FileValidationResult, ToolUsage};
use crate::recommendations::{corpus_recommendations, file_recommendations};
use crate::scoring::{file_score, is_passing, CorpusTally};
use chrono::Utc;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Progress callback: (document, completed, total)
pub type ProgressCallback = Box<dyn Fn(&str, usize, usize) + Send + Sync>;

/// Orchestrates document validation across all registered checks
pub struct ValidationEngine {
    /// Registered checks, in evaluation order
    checks: Vec<Arc<dyn Check>>,
    config: ValidatorConfig,
    /// Number of worker threads for corpus runs
    workers: usize,
    progress_callback: Option<ProgressCallback>,
    source: Arc<dyn DocumentSource>,
}

impl ValidationEngine {
    /// Create an engine with no checks registered
    ///
    /// # Arguments
    /// * `workers` - Number of worker threads (0 = auto-detect)
    pub fn new(config: ValidatorConfig, workers: usize) -> Self {
        let actual_workers = if workers == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
                .min(16)
        } else {
            workers
        };

        Self {
            checks: Vec::new(),
            config,
            workers: actual_workers,
            progress_callback: None,
            source: Arc::new(FsSource),
        }
    }

    /// Engine with the seven standard checks registered
    pub fn with_default_checks(config: ValidatorConfig, workers: usize) -> Self {
        let mut engine = Self::new(config, workers);
        engine.register_all(super::default_checks());
        engine
    }

    /// Set a progress callback
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Replace where document text comes from
    pub fn with_source(mut self, source: Arc<dyn DocumentSource>) -> Self {
        self.source = source;
        self
    }

    pub fn register(&mut self, check: Arc<dyn Check>) {
        debug!("Registering check: {}", check.name());
        self.checks.push(check);
    }

    pub fn register_all(&mut self, checks: impl IntoIterator<Item = Arc<dyn Check>>) {
        for check in checks {
            self.register(check);
        }
    }

    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Validate in-memory text as if it were the document at `path`
    pub fn validate_content(&self, path: &Path, content: &str) -> FileValidationResult {
        self.validate_document(&Document::new(path, content))
    }

    /// Run every check against one document
    pub fn validate_document(&self, document: &Document) -> FileValidationResult {
        let ctx = CheckContext::new(&document.path, document.category, &self.config);

        let mut checks = BTreeMap::new();
        let mut issues = Vec::new();
        for check in &self.checks {
            let result = check.check(&document.content, &ctx);
            debug!(
                "{} [{}]: {} issue(s)",
                document.path.display(),
                check.name(),
                result.issues.len()
            );
            issues.extend(result.issues.iter().cloned());
            checks.insert(check.kind(), result);
        }

        let score = file_score(&checks);
        let recommendations = file_recommendations(score, &issues);
        let tools_mentioned = mentioned_tools(&document.content, &self.config.tool_vocabulary());

        FileValidationResult {
            file: document.path.to_string_lossy().into_owned(),
            passed: is_passing(score),
            score,
            checks,
            issues,
            recommendations,
            tools_mentioned,
        }
    }

    /// Read and validate one document
    ///
    /// A read failure is recorded as a failed result, never returned as an error.
    pub fn validate_file(&self, path: &Path) -> FileValidationResult {
        match self.source.read(path) {
            Ok(content) => {
                let result = self.validate_content(path, &content);
                info!(
                    "Validated {} (score {:.1}, {})",
                    path.display(),
                    result.score,
                    if result.passed { "pass" } else { "fail" }
                );
                result
            }
            Err(err) => {
                warn!("{}: {}", path.display(), err);
                FileValidationResult::unreadable(path.to_string_lossy(), &err)
            }
        }
    }

    /// Validate a collection of documents
    pub fn validate_corpus(&self, paths: &[PathBuf]) -> CorpusValidationResult {
        self.validate_corpus_with(paths, self.progress_callback.as_deref())
    }

    /// Validate a collection of documents, reporting to `progress` instead of
    /// the registered callback
    pub fn validate_corpus_with(
        &self,
        paths: &[PathBuf],
        progress: Option<&(dyn Fn(&str, usize, usize) + Send + Sync)>,
    ) -> CorpusValidationResult {
        let start = Instant::now();
        info!(
            "Validating {} documents with {} checks on {} workers",
            paths.len(),
            self.checks.len(),
            self.workers
        );

        let completed = AtomicUsize::new(0);
        let total = paths.len();
        let run_one = |path: &PathBuf| {
            let result = self.validate_file(path);
            let done = completed.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(callback) = progress {
                callback(&result.file, done, total);
            }
            result
        };

        let file_results: Vec<FileValidationResult> =
            match rayon::ThreadPoolBuilder::new().num_threads(self.workers).build() {
                Ok(pool) => pool.install(|| paths.par_iter().map(run_one).collect()),
                Err(err) => {
                    warn!("Thread pool unavailable ({}), validating sequentially", err);
                    paths.iter().map(run_one).collect()
                }
            };

        let tally: CorpusTally = file_results.iter().collect();
        let results: BTreeMap<String, FileValidationResult> = file_results
            .into_iter()
            .map(|r| (r.file.clone(), r))
            .collect();

        let overall_score = tally.overall_score();
        let recommendations = corpus_recommendations(overall_score, tally.failed, &results);
        let tool_usage = self.tool_usage(&results);

        info!(
            "Validation complete in {:?}: {}/{} passed, overall {:.1}/10",
            start.elapsed(),
            tally.passed,
            tally.validated,
            overall_score
        );

        CorpusValidationResult {
            timestamp: Utc::now(),
            overall_score,
            files_validated: tally.validated,
            files_passed: tally.passed,
            files_failed: tally.failed,
            results,
            recommendations,
            tool_usage,
        }
    }

    /// Documents mentioning each server that has a configured usage target
    pub fn tool_usage(&self, results: &BTreeMap<String, FileValidationResult>) -> Vec<ToolUsage> {
        self.config
            .mcp_integration
            .optimization_targets
            .iter()
            .map(|(server, target)| ToolUsage {
                server: server.clone(),
                documents: results
                    .values()
                    .filter(|r| r.tools_mentioned.iter().any(|t| t.eq_ignore_ascii_case(server)))
                    .count(),
                target: target.target_usage,
            })
            .collect()
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_default_checks(ValidatorConfig::default(), 0)
    }
}

/// Builder for ValidationEngine with fluent API
pub struct ValidationEngineBuilder {
    config: ValidatorConfig,
    workers: usize,
    checks: Option<Vec<Arc<dyn Check>>>,
    progress_callback: Option<ProgressCallback>,
    source: Option<Arc<dyn DocumentSource>>,
}

impl ValidationEngineBuilder {
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
            workers: 0,
            checks: None,
            progress_callback: None,
            source: None,
        }
    }

    pub fn config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Set number of worker threads
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Add a check; once any check is added the defaults are not registered
    pub fn check(mut self, check: Arc<dyn Check>) -> Self {
        self.checks.get_or_insert_with(Vec::new).push(check);
        self
    }

    /// Set progress callback
    pub fn on_progress(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub fn source(mut self, source: Arc<dyn DocumentSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Build the engine
    pub fn build(self) -> ValidationEngine {
        let mut engine = ValidationEngine::new(self.config, self.workers);
        engine.register_all(self.checks.unwrap_or_else(super::default_checks));

        if let Some(callback) = self.progress_callback {
            engine = engine.with_progress_callback(callback);
        }
        if let Some(source) = self.source {
            engine = engine.with_source(source);
        }
        engine
    }
}

impl Default for ValidationEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
