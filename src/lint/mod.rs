// src/lint/mod.rs

//! Script linting with auto-fix.
//!
//! Reads the lint source globs, applies the rule set (`rules.rs`), rewrites
//! fixed files in place, and prints a compact per-file report to stderr
//! (`report.rs`). Enforcement is a config knob: by default findings never
//! fail anything.

pub mod report;
pub mod rules;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::paths::{LINT_BASE, LINT_SOURCES};
use crate::pipeline::fileset::FileSet;

pub use rules::{lint_source, Finding};

/// All findings for one source file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub findings: Vec<Finding>,
}

/// Aggregated lint result for one invocation.
#[derive(Debug, Clone, Default)]
pub struct LintSummary {
    pub reports: Vec<FileReport>,
}

impl LintSummary {
    pub fn total(&self) -> usize {
        self.reports.iter().map(|r| r.findings.len()).sum()
    }

    /// Findings the auto-fixer could not repair.
    pub fn unfixed(&self) -> usize {
        self.reports
            .iter()
            .flat_map(|r| &r.findings)
            .filter(|f| !f.fixed)
            .count()
    }
}

/// Run the lint task over the fixed source globs under `root`.
///
/// Files changed by the auto-fixer are rewritten in place. The compact
/// report goes to stderr; the caller decides whether unfixed findings are
/// an error (`fail_on_lint`).
pub fn run_lint(root: &Path) -> Result<LintSummary> {
    let sources: Vec<String> = LINT_SOURCES.iter().map(|s| s.to_string()).collect();
    let set = FileSet::read_globs(root, LINT_BASE, &sources)?;

    let mut summary = LintSummary::default();

    for item in set.items() {
        let Ok(text) = item.text() else {
            debug!(file = %item.rel_path.display(), "skipping non-UTF-8 file");
            continue;
        };

        let (fixed_text, findings) = lint_source(text);
        if findings.is_empty() {
            continue;
        }

        if fixed_text != text {
            // abs_path is always present for files read off disk.
            if let Some(abs) = &item.abs_path {
                fs::write(abs, &fixed_text)
                    .with_context(|| format!("writing auto-fixed file {:?}", abs))?;
                debug!(file = %item.rel_path.display(), "auto-fixes written in place");
            }
        }

        summary.reports.push(FileReport {
            path: item.rel_path.clone(),
            findings,
        });
    }

    report::print_compact(&summary);
    info!(
        files = summary.reports.len(),
        findings = summary.total(),
        unfixed = summary.unfixed(),
        "lint finished"
    );

    Ok(summary)
}
