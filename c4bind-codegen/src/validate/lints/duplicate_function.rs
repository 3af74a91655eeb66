//! Lint for functions declared more than once.

use std::collections::HashMap;

use super::super::{Lint, LintContext, lint::location};
use crate::validate::Diagnostic;

/// Lint that warns when a function name appears on more than one line.
///
/// All descriptor files feed the same partial classes, so a repeat in a
/// different file collides just as one in the same file does.
pub struct DuplicateFunctionLint;

impl Lint for DuplicateFunctionLint {
    fn name(&self) -> &'static str {
        "duplicate-function"
    }

    fn description(&self) -> &'static str {
        "Detect functions declared more than once"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, String> = HashMap::new();

        for file in ctx.files {
            for descriptor in file.descriptors() {
                let here = location(file, descriptor.line);
                if let Some(first) = seen.get(descriptor.name.as_str()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "function '{}' is declared more than once (first at {})",
                                descriptor.name, first
                            ),
                        )
                        .at(here),
                    );
                } else {
                    seen.insert(&descriptor.name, here);
                }
            }
        }
    }
}
