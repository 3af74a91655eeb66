//! Lint for catalog entries that never reach the output.

use std::collections::HashSet;

use c4bind_descriptor::{Binding, LiteralCatalog};

use super::super::{Lint, LintContext};
use crate::validate::Diagnostic;

/// Lint that warns about literal entries no descriptor line uses.
///
/// A bridge literal for a raw-only function is also unused: raw-only
/// lines have no bridge declaration to replace.
pub struct UnusedLiteralLint;

impl Lint for UnusedLiteralLint {
    fn name(&self) -> &'static str {
        "unused-literal"
    }

    fn description(&self) -> &'static str {
        "Detect literal catalog entries that match no function"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let mut bridged = HashSet::new();
        let mut raw_only = HashSet::new();
        for descriptor in ctx.files.iter().flat_map(|f| f.descriptors()) {
            match descriptor.binding {
                Binding::Bridge => bridged.insert(descriptor.name.as_str()),
                Binding::RawOnly => raw_only.insert(descriptor.name.as_str()),
            };
        }

        self.check_catalog(&ctx.literals.bridge, "bridge", diagnostics, |name| {
            if bridged.contains(name) {
                None
            } else if raw_only.contains(name) {
                Some("only matches a raw-only function and is never emitted")
            } else {
                Some("does not match any function")
            }
        });

        self.check_catalog(&ctx.literals.raw, "raw", diagnostics, |name| {
            if bridged.contains(name) || raw_only.contains(name) {
                None
            } else {
                Some("does not match any function")
            }
        });
    }
}

impl UnusedLiteralLint {
    fn check_catalog(
        &self,
        catalog: &LiteralCatalog,
        layer: &str,
        diagnostics: &mut Vec<Diagnostic>,
        problem: impl Fn(&str) -> Option<&'static str>,
    ) {
        for name in catalog.names() {
            if let Some(problem) = problem(name) {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!("{} literal '{}' {}", layer, name, problem),
                    )
                    .at(format!("{} literals", layer)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use c4bind_descriptor::{DescriptorFile, Literals};

    use super::*;

    fn run(descriptors: &str, literals: Literals) -> Vec<Diagnostic> {
        let files = vec![
            DescriptorFile::parse(descriptors, "C4Key_native.cs.template", &literals).unwrap(),
        ];
        let mut diagnostics = Vec::new();
        UnusedLiteralLint.check(&LintContext::new(&files, &literals), &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_used_literals() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4key_new\n        bridge body\n"),
            LiteralCatalog::parse("c4key_new\n        raw body\nc4key_free\n        raw\n"),
        );

        let diagnostics = run(".bridge .C4Key* c4key_new\n.raw .void c4key_free C4Key*:key\n", literals);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unmatched_literals() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4key_old\n    x\n"),
            LiteralCatalog::parse("c4key_gone\n    y\n"),
        );

        let diagnostics = run(".bridge .C4Key* c4key_new\n", literals);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0].message,
            "bridge literal 'c4key_old' does not match any function"
        );
        assert_eq!(diagnostics[0].location.as_deref(), Some("bridge literals"));
        assert_eq!(
            diagnostics[1].message,
            "raw literal 'c4key_gone' does not match any function"
        );
    }

    #[test]
    fn test_bridge_literal_for_raw_only_function() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4key_free\n    x\n"),
            LiteralCatalog::default(),
        );

        let diagnostics = run(".raw .void c4key_free C4Key*:key\n", literals);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("raw-only"));
    }
}
