//! Lint trait for descriptor validation.

use c4bind_descriptor::{DescriptorFile, Literals};

use super::Diagnostic;

/// Everything a lint may look at: the parsed descriptor files of one
/// directory and the catalogs they were parsed against.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub files: &'a [DescriptorFile],
    pub literals: &'a Literals,
}

impl<'a> LintContext<'a> {
    pub fn new(files: &'a [DescriptorFile], literals: &'a Literals) -> Self {
        Self { files, literals }
    }
}

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// A lint that checks descriptor files for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the inputs and add any diagnostics.
    fn check(&self, ctx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>);

    /// Get information about this lint.
    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// `file:line` for a descriptor line, using only the file name.
pub(crate) fn location(file: &DescriptorFile, line: usize) -> String {
    format!("{}:{}", file_name(file), line)
}

pub(crate) fn file_name(file: &DescriptorFile) -> String {
    file.path()
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.path().display().to_string())
}
