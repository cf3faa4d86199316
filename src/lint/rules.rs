// src/lint/rules.rs

//! The built-in rule set.
//!
//! Whitespace-level style rules with auto-fix: CRLF line endings, trailing
//! whitespace, and a missing final newline are repaired; over-long lines are
//! reported but left alone.

const MAX_LINE_LEN: usize = 120;

/// One rule violation in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub col: usize,
    pub rule: &'static str,
    pub message: String,
    /// Whether the auto-fixer repaired this finding.
    pub fixed: bool,
}

/// Lint one source file. Returns the (possibly fixed) text and all findings.
pub fn lint_source(src: &str) -> (String, Vec<Finding>) {
    let mut findings = Vec::new();

    let text = if src.contains("\r\n") {
        let line = src
            .split_inclusive('\n')
            .position(|l| l.ends_with("\r\n"))
            .map(|i| i + 1)
            .unwrap_or(1);
        findings.push(Finding {
            line,
            col: 1,
            rule: "no-crlf",
            message: "CRLF line endings".to_string(),
            fixed: true,
        });
        src.replace("\r\n", "\n")
    } else {
        src.to_string()
    };

    let mut fixed_lines = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim_end();
        if trimmed.len() != line.len() {
            findings.push(Finding {
                line: idx + 1,
                col: trimmed.len() + 1,
                rule: "no-trailing-whitespace",
                message: "trailing whitespace".to_string(),
                fixed: true,
            });
        }

        let width = trimmed.chars().count();
        if width > MAX_LINE_LEN {
            findings.push(Finding {
                line: idx + 1,
                col: MAX_LINE_LEN + 1,
                rule: "max-line-length",
                message: format!("line is {width} chars (max {MAX_LINE_LEN})"),
                fixed: false,
            });
        }

        fixed_lines.push(trimmed.to_string());
    }

    let mut fixed = fixed_lines.join("\n");
    if !text.is_empty() {
        if !text.ends_with('\n') {
            findings.push(Finding {
                line: fixed_lines.len(),
                col: fixed_lines.last().map(|l| l.len() + 1).unwrap_or(1),
                rule: "final-newline",
                message: "missing final newline".to_string(),
                fixed: true,
            });
        }
        fixed.push('\n');
    }

    (fixed, findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_source_has_no_findings() {
        let src = "function f() {\n  return 1;\n}\n";
        let (fixed, findings) = lint_source(src);
        assert_eq!(fixed, src);
        assert!(findings.is_empty());
    }

    #[test]
    fn trailing_whitespace_is_fixed() {
        let (fixed, findings) = lint_source("var a = 1;   \n");
        assert_eq!(fixed, "var a = 1;\n");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "no-trailing-whitespace");
        assert!(findings[0].fixed);
    }

    #[test]
    fn crlf_and_missing_newline_are_fixed() {
        let (fixed, findings) = lint_source("a();\r\nb();");
        assert_eq!(fixed, "a();\nb();\n");
        let rules: Vec<_> = findings.iter().map(|f| f.rule).collect();
        assert!(rules.contains(&"no-crlf"));
        assert!(rules.contains(&"final-newline"));
        assert!(findings.iter().all(|f| f.fixed));
    }

    #[test]
    fn long_lines_are_reported_but_not_fixed() {
        let long = format!("var x = \"{}\";\n", "a".repeat(150));
        let (fixed, findings) = lint_source(&long);
        assert_eq!(fixed, long);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "max-line-length");
        assert!(!findings[0].fixed);
    }

    #[test]
    fn empty_source_stays_empty() {
        let (fixed, findings) = lint_source("");
        assert_eq!(fixed, "");
        assert!(findings.is_empty());
    }
}
