//! Lint for descriptor files without declarations.

use super::super::{Lint, LintContext, lint::file_name};
use crate::validate::Diagnostic;

/// Lint that notes descriptor files producing empty classes.
pub struct EmptyFileLint;

impl Lint for EmptyFileLint {
    fn name(&self) -> &'static str {
        "empty-file"
    }

    fn description(&self) -> &'static str {
        "Note descriptor files that declare no functions"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for file in ctx.files.iter().filter(|f| f.is_empty()) {
            diagnostics.push(
                Diagnostic::info(
                    self.name(),
                    "descriptor file declares no functions; both classes will be empty",
                )
                .at(file_name(file)),
            );
        }
    }
}
