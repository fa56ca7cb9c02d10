//! Lint command handler.
//!
//! Reports mask patterns containing Cyrillic look-alikes of `A`/`X` and mask
//! directives that resolve to nothing. Findings are advisory; the command only
//! fails when the schema itself cannot be loaded.

use crate::config::load_schema;
use clap::Args;
use mock_core::{MaskDirective, MockSchema};
use mock_generator::{check_pattern, LookalikeDiagnostic};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for `mockgen lint`.
#[derive(Args, Clone, Debug)]
pub struct LintArgs {
    /// Path to schema YAML file
    #[arg(long, short = 's')]
    pub schema: PathBuf,
}

/// One advisory finding on a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum LintFinding {
    /// Custom pattern with look-alike characters
    Lookalike {
        record: String,
        diagnostic: LookalikeDiagnostic,
    },
    /// Mask value that is neither a built-in id nor a `pattern` mapping
    UnresolvedMask {
        record: String,
        field: String,
        raw: String,
    },
}

impl fmt::Display for LintFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookalike { record, diagnostic } => write!(f, "{record}: {diagnostic}"),
            Self::UnresolvedMask { record, field, raw } => write!(
                f,
                "{record}: mask {raw} on field '{field}' is neither a built-in nor a pattern \
                 and is ignored"
            ),
        }
    }
}

/// Collect findings for every masked field of every record.
pub fn lint_schema(schema: &MockSchema) -> Vec<LintFinding> {
    let mut findings = Vec::new();

    for record in &schema.records {
        for field in &record.fields {
            let Some(raw) = &field.mask else {
                continue;
            };
            match MaskDirective::resolve(raw) {
                Some(MaskDirective::Custom(pattern)) => {
                    if let Some(diagnostic) = check_pattern(&pattern, Some(&field.name)) {
                        findings.push(LintFinding::Lookalike {
                            record: record.name.clone(),
                            diagnostic,
                        });
                    }
                }
                Some(MaskDirective::Builtin(_)) => {}
                None => findings.push(LintFinding::UnresolvedMask {
                    record: record.name.clone(),
                    field: field.name.clone(),
                    raw: serde_json::to_string(raw).unwrap_or_else(|_| format!("{raw:?}")),
                }),
            }
        }
    }

    findings
}

/// Print findings, one per line.
pub fn run_lint<W: Write>(args: &LintArgs, mut out: W) -> anyhow::Result<Vec<LintFinding>> {
    let schema = load_schema(&args.schema)?;
    let findings = lint_schema(&schema);

    for finding in &findings {
        writeln!(out, "{finding}")?;
    }
    tracing::info!(
        "Checked {} records: {} findings",
        schema.records.len(),
        findings.len()
    );
    Ok(findings)
}
