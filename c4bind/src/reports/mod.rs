//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod list;
mod output;

pub use check::CheckReport;
pub use generate::GenerateReport;
pub use list::{ListReport, ListedFile, ListedFunction};
#[cfg(test)]
pub use output::BufferOutput;
pub use output::{Report, TerminalOutput};

use c4bind_codegen::validate::Diagnostic;

/// A diagnostic's message with its location appended.
fn describe(diag: &Diagnostic) -> String {
    match &diag.location {
        Some(loc) => format!("{}\n  --> {}", diag.message, loc),
        None => diag.message.clone(),
    }
}
