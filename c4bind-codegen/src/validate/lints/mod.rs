//! Built-in lints.

mod duplicate_function;
mod empty_file;
mod suspicious_type;
mod unused_literal;

pub use duplicate_function::DuplicateFunctionLint;
pub use empty_file::EmptyFileLint;
pub use suspicious_type::SuspiciousTypeLint;
pub use unused_literal::UnusedLiteralLint;
