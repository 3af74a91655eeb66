//! Core utilities and types for the c4bind binding generator.
//!
//! This crate provides the file-writing primitives and path helpers
//! shared by the descriptor parser, the code generators and the CLI.

mod file;
mod paths;

// File operations
pub use file::{GeneratedFile, WriteResult};
// Path helpers
pub use paths::{display_name, output_path};
