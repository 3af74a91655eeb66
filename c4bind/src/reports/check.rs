//! Check command report data structures.

use std::path::PathBuf;

use c4bind_codegen::validate::{Diagnostic, Severity, error_count};
use serde::Serialize;

use super::{
    describe,
    output::{Output, Report},
};

/// Report data from descriptor validation.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Directory that was checked.
    pub dir: PathBuf,
    /// Descriptor files found.
    pub files: usize,
    /// Functions declared across the files that parsed.
    pub functions: usize,
    /// Parse errors first, then lint diagnostics.
    pub diagnostics: Vec<Diagnostic>,
    /// Parse errors rendered with their source snippet.
    #[serde(skip)]
    pub parse_reports: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        error_count(&self.diagnostics) == 0
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for report in &self.parse_reports {
            out.error(report);
        }

        let mut printed_problem = !self.parse_reports.is_empty();
        for diag in &self.diagnostics {
            match diag.severity {
                // Already shown in full above
                Severity::Error if diag.source == "parse" => {}
                Severity::Error => {
                    printed_problem = true;
                    out.error(&describe(diag));
                }
                Severity::Warning => {
                    printed_problem = true;
                    out.warning(&describe(diag));
                }
                Severity::Info => out.preformatted(&format!("info: {}", describe(diag))),
            }
        }

        if printed_problem {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} is valid ({} descriptor file{}, {} function{})",
                self.dir.display(),
                self.files,
                if self.files == 1 { "" } else { "s" },
                self.functions,
                if self.functions == 1 { "" } else { "s" },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::BufferOutput;

    #[test]
    fn test_valid_with_warning() {
        let report = CheckReport {
            dir: PathBuf::from("interop"),
            files: 1,
            functions: 2,
            diagnostics: vec![
                Diagnostic::warning("duplicate-function", "function 'c4a' is declared more than once")
                    .at("C4A_native.cs.template:2"),
            ],
            parse_reports: Vec::new(),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(report.is_valid());
        assert_eq!(out.stderr.len(), 1);
        assert_eq!(
            out.stdout,
            ["", "✓ interop is valid (1 descriptor file, 2 functions)"]
        );
    }

    #[test]
    fn test_parse_errors_shown_once() {
        let report = CheckReport {
            dir: PathBuf::from("."),
            files: 1,
            functions: 0,
            diagnostics: vec![Diagnostic::error("parse", "empty descriptor line").at("a.template:2")],
            parse_reports: vec!["<rendered>".to_string()],
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(!report.is_valid());
        assert_eq!(out.stderr, ["error: <rendered>"]);
        assert_eq!(out.stdout, [""]);
    }

    #[test]
    fn test_json_skips_rendered_reports() {
        let report = CheckReport {
            dir: PathBuf::from("."),
            files: 0,
            functions: 0,
            diagnostics: vec![],
            parse_reports: vec!["x".to_string()],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("parse_reports").is_none());
        assert_eq!(json["files"], 0);
    }
}
