// src/lint/report.rs

use crate::lint::LintSummary;

/// Print a compact per-file report to stderr, one line per finding:
///
/// ```text
/// src/js/app.js: line 3, col 12, fixed - trailing whitespace (no-trailing-whitespace)
/// ```
pub fn print_compact(summary: &LintSummary) {
    for report in &summary.reports {
        for f in &report.findings {
            let status = if f.fixed { "fixed" } else { "warning" };
            eprintln!(
                "{}: line {}, col {}, {} - {} ({})",
                report.path.display(),
                f.line,
                f.col,
                status,
                f.message,
                f.rule
            );
        }
    }

    let total = summary.total();
    if total > 0 {
        eprintln!(
            "{} problem(s), {} auto-fixed",
            total,
            total - summary.unfixed()
        );
    }
}
