//! Shared code generation utilities for the c4bind binding generator.
//!
//! This crate provides language-agnostic abstractions used by the
//! target-language generators (e.g., `c4bind-codegen-csharp`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile, etc.)
//! - [`validate`] - Lints over descriptor files and catalogs

pub mod builder;
pub mod language;
pub mod validate;

pub use builder::{CodeBuilder, CodeFragment, Renderable};
pub use language::{GenerateResult, LanguageCodegen, PreviewFile};
