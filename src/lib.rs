//! docaudit - Markdown documentation quality validator
//!
//! Runs seven checks over Markdown documents, scores each document out of
//! 10, aggregates a corpus score and derives remediation advice.
//!
//! ```ignore
//! use docaudit::checks::ValidationEngineBuilder;
//! use docaudit::config::load_validator_config;
//!
//! let config = load_validator_config(Path::new("docs"));
//! let engine = ValidationEngineBuilder::new().config(config).build();
//! let result = engine.validate_file(Path::new("docs/2024-06-01-change-log.md"));
//! println!("{}: {:.1}/10", result.file, result.score);
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod recommendations;
pub mod reporters;
pub mod scoring;

pub use checks::{ValidationEngine, ValidationEngineBuilder};
pub use config::ValidatorConfig;
pub use error::{AuditError, AuditResult};
pub use models::{CheckKind, CheckResult, CorpusValidationResult, Document, FileValidationResult};
