//! CLI command definitions and handlers

mod check;
mod file;
mod files;
mod init;
mod report;
mod summary;

use crate::checks::{ValidationEngine, ValidationEngineBuilder};
use crate::config::{resolve_config, ValidatorConfig};
use crate::models::CheckKind;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Parse and validate workers count (1-64)
fn parse_workers(s: &str) -> Result<usize, String> {
    let n: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        Err("workers must be at least 1".to_string())
    } else if n > 64 {
        Err("workers cannot exceed 64".to_string())
    } else {
        Ok(n)
    }
}

/// Parse a score threshold on the 0-10 scale
fn parse_score(s: &str) -> Result<f64, String> {
    let score: f64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid score", s))?;
    if (0.0..=10.0).contains(&score) {
        Ok(score)
    } else {
        Err("score must be between 0 and 10".to_string())
    }
}

/// docaudit - Markdown documentation quality validator
#[derive(Parser, Debug)]
#[command(name = "docaudit")]
#[command(
    version,
    about = "Validate Markdown documentation against structure, section, link and timestamp rules",
    long_about = "docaudit runs seven checks over every Markdown document in a directory \
tree and scores each document out of 10. A document passes with a score of 7.0 or more.\n\n\
Run without a subcommand to check the current directory:\n  \
docaudit .",
    after_help = "\
Examples:
  docaudit docs                          Check every document under docs/
  docaudit docs check --format json      JSON output for scripting
  docaudit docs check --fail-under 8     Exit code 1 if the overall score is below 8
  docaudit file docs/guide.md            Validate a single document
  docaudit docs report                   Write validation-report-<timestamp>.md
  docaudit docs summary --check structure"
)]
pub struct Cli {
    /// Path to the documentation root (default: current directory)
    #[arg(global = true, default_value = ".")]
    pub path: PathBuf,

    /// Configuration file (default: docaudit.toml or .docauditrc.json in PATH)
    #[arg(long, global = true, env = "DOCAUDIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    /// Number of parallel workers (1-64)
    #[arg(long, global = true, default_value = "8", value_parser = parse_workers)]
    pub workers: usize,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a docaudit.toml config file with the built-in rule tables
    Init,

    /// Validate every document under PATH
    #[command(after_help = "\
Examples:
  docaudit docs check                       Terminal summary
  docaudit docs check --format markdown     Full Markdown report on stdout
  docaudit docs check -f json -o out.json   JSON written to a file
  docaudit docs check --fail-under 7        Exit code 1 below 7.0 (CI mode)")]
    Check {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if the overall score is below this value
        #[arg(long, value_parser = parse_score)]
        fail_under: Option<f64>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Validate the single document given as PATH
    #[command(after_help = "\
Examples:
  docaudit file docs/2024-06-01-change-log.md
  docaudit file docs/guide.md --format json")]
    File {
        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,
    },

    /// Generate the Markdown validation report and save it
    Report {
        /// Directory to write the report to (default: PATH)
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },

    /// Show PASS/FAIL for one check across every document
    Summary {
        /// Check to summarize (structure, required-sections, tool-integration,
        /// template-compliance, cross-references, formatting, timestamps)
        #[arg(long)]
        check: CheckKind,
    },
}

/// Everything a command needs to validate documents under a root
pub(crate) struct Workspace {
    pub root: PathBuf,
    pub engine: ValidationEngine,
}

impl Workspace {
    fn open(root: &Path, explicit_config: Option<&Path>, workers: usize) -> Self {
        let config = resolve_config(root, explicit_config);
        Self::with_config(root, config, workers)
    }

    fn with_config(root: &Path, config: ValidatorConfig, workers: usize) -> Self {
        let engine = ValidationEngineBuilder::new()
            .config(config)
            .workers(workers)
            .build();
        Self {
            root: root.to_path_buf(),
            engine,
        }
    }

    /// Documents under the root, in a stable order
    pub fn documents(&self) -> Result<Vec<PathBuf>> {
        files::collect_documents(&self.root, self.engine.config())
    }
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    let open = || Workspace::open(&cli.path, cli.config.as_deref(), cli.workers);

    match cli.command {
        Some(Commands::Init) => init::run(&cli.path),

        Some(Commands::Check {
            format,
            output,
            fail_under,
            no_progress,
        }) => check::run(&open(), &format, output.as_deref(), fail_under, no_progress),

        None => check::run(&open(), "text", None, None, false),

        Some(Commands::File { format }) => {
            // Config is looked up next to the document
            let root = match cli.path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let workspace = Workspace::open(root, cli.config.as_deref(), cli.workers);
            file::run(&workspace, &cli.path, &format)
        }

        Some(Commands::Report { output_dir }) => report::run(&open(), output_dir.as_deref()),

        Some(Commands::Summary { check }) => summary::run(&open(), check),
    }
}
