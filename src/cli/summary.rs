//! Summary command - PASS/FAIL for one check across the corpus

use super::Workspace;
use crate::models::{CheckKind, CorpusValidationResult};
use anyhow::Result;
use console::style;

/// Run the summary command
pub fn run(workspace: &Workspace, kind: CheckKind) -> Result<()> {
    let documents = workspace.documents()?;
    let result = workspace.engine.validate_corpus(&documents);

    println!("{} results:", style(kind).bold());
    for line in summary_lines(&result, kind) {
        println!("{}", line);
    }
    Ok(())
}

/// `file: PASS|FAIL` per document; documents without the check fail
fn summary_lines(result: &CorpusValidationResult, kind: CheckKind) -> Vec<String> {
    result
        .results
        .iter()
        .map(|(file, file_result)| {
            let passed = file_result.check(kind).map(|c| c.passed).unwrap_or(false);
            format!("{}: {}", file, if passed { "PASS" } else { "FAIL" })
        })
        .collect()
}
