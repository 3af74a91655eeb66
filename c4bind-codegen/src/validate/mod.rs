//! Validation of descriptor files and literal catalogs.
//!
//! Malformed lines are hard errors raised by the parser; lints only see
//! files that parsed and report problems that still produce output.

mod diagnostic;
mod lint;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lint::{Lint, LintContext, LintInfo};
pub use lints::{DuplicateFunctionLint, EmptyFileLint, SuspiciousTypeLint, UnusedLiteralLint};

/// Runs a configurable set of lints.
pub struct Validator {
    lints: Vec<Box<dyn Lint>>,
}

impl Validator {
    /// Create a validator with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateFunctionLint),
                Box::new(SuspiciousTypeLint),
                Box::new(UnusedLiteralLint),
                Box::new(EmptyFileLint),
            ],
        }
    }

    /// Create a validator with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Get information about all lints that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint, in registration order.
    pub fn run(&self, ctx: &LintContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(ctx, &mut diagnostics);
        }
        diagnostics
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Number of diagnostics with error severity.
pub fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.severity.is_error()).count()
}

/// Number of diagnostics with warning severity.
pub fn warning_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.severity.is_warning()).count()
}
