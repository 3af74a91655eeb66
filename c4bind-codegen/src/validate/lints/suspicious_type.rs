//! Lint for type tokens that look like misspelled slices.

use super::super::{Lint, LintContext, lint::location};
use crate::validate::Diagnostic;

/// Lint that warns about `C4Slice`-like tokens the generator does not
/// recognize, such as `C4Slice_B` or `C4SliceResult_bytes`.
///
/// Unrecognized tokens are copied into the output unchanged, which for
/// these names means a raw declaration with no conversion at all.
pub struct SuspiciousTypeLint;

impl Lint for SuspiciousTypeLint {
    fn name(&self) -> &'static str {
        "suspicious-type"
    }

    fn description(&self) -> &'static str {
        "Detect slice-like type tokens that are passed through unconverted"
    }

    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for file in ctx.files {
            for descriptor in file.descriptors() {
                let Some(signature) = descriptor.signature() else {
                    continue;
                };

                let types = std::iter::once(&signature.return_type)
                    .chain(signature.params.iter().map(|p| &p.ty));
                for ty in types.filter(|ty| ty.is_suspicious()) {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "type '{}' in '{}' is not a known slice type and will not be converted",
                                ty, descriptor.name
                            ),
                        )
                        .at(location(file, descriptor.line)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use c4bind_descriptor::{DescriptorFile, Literals};

    use super::*;

    #[test]
    fn test_known_types_pass() {
        let literals = Literals::default();
        let files = vec![
            DescriptorFile::parse(
                ".bridge .C4SliceResult_b c4doc_body C4Document*:doc C4Slice:key UIntPtr:n\n",
                "C4Document_native.cs.template",
                &literals,
            )
            .unwrap(),
        ];

        let mut diagnostics = Vec::new();
        SuspiciousTypeLint.check(&LintContext::new(&files, &literals), &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_misspelled_slice_is_reported() {
        let literals = Literals::default();
        let files = vec![
            DescriptorFile::parse(
                ".bridge .C4Slice_B c4doc_body C4Slice_bytes:key\n",
                "C4Document_native.cs.template",
                &literals,
            )
            .unwrap(),
        ];

        let mut diagnostics = Vec::new();
        SuspiciousTypeLint.check(&LintContext::new(&files, &literals), &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].message.contains("'C4Slice_B'"));
        assert!(diagnostics[1].message.contains("'C4Slice_bytes'"));
        assert_eq!(
            diagnostics[1].location.as_deref(),
            Some("C4Document_native.cs.template:1")
        );
    }
}
