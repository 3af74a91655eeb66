//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for target-language generators
//! - [`TypeMapper`] - Trait for mapping descriptor types to language types
//! - [`GenerateResult`] - Result of code generation
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper, WrittenFile};
