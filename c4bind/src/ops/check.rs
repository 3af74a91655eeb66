//! Check operation - descriptor parsing and lints.

use c4bind_codegen::validate::{Diagnostic, LintContext, Validator};
use c4bind_descriptor::Workspace;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Unlike generation, a malformed file does not stop the check: every
/// file is parsed and each failure becomes an error diagnostic.
pub fn check(workspace: &Workspace) -> Result<CheckReport> {
    let paths = workspace
        .descriptor_paths()
        .wrap_err("Failed to list descriptor files")?;

    let mut parsed = Vec::new();
    let mut diagnostics = Vec::new();
    let mut parse_reports = Vec::new();

    for path in &paths {
        match workspace.load(path) {
            Ok(file) => parsed.push(file),
            Err(e) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                let location = match e.line() {
                    Some(line) => format!("{}:{}", name, line),
                    None => name,
                };
                diagnostics.push(Diagnostic::error("parse", e.to_string()).at(location));
                parse_reports.push(format!("{:?}", miette::Report::new(*e)));
            }
        }
    }

    let ctx = LintContext::new(&parsed, workspace.literals());
    diagnostics.extend(Validator::new().run(&ctx));

    Ok(CheckReport {
        dir: workspace.dir().to_path_buf(),
        files: paths.len(),
        functions: parsed.iter().map(|f| f.len()).sum(),
        diagnostics,
        parse_reports,
    })
}
