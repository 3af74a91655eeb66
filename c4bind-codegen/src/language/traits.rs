//! Language-agnostic code generation traits.

use std::path::{Path, PathBuf};

use c4bind_core::WriteResult;
use c4bind_descriptor::{CType, Param};
use eyre::Result;

/// Trait for target-language generators.
///
/// A generator is built from one parsed descriptor file and renders the
/// single binding source file that descriptor file describes.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "csharp")
    fn language(&self) -> &'static str;

    /// File extension of generated source files (e.g., "cs")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Generate all files into the specified output directory
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// Result of code generation
#[derive(Debug, Default)]
pub struct GenerateResult {
    /// Files written during this run
    pub files: Vec<WrittenFile>,
}

impl GenerateResult {
    /// Number of files that did not exist before this run.
    pub fn created(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.result == WriteResult::Created)
            .count()
    }
}

/// A file written by [`LanguageCodegen::generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub result: WriteResult,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Path relative to the output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// Trait for mapping descriptor types to the type spellings of one layer
/// pair (managed bridge layer and raw native layer).
pub trait TypeMapper {
    /// The target language name
    fn language(&self) -> &'static str;

    /// Type of a value as seen by callers of the bridge layer.
    fn bridge_type(&self, ty: &CType) -> String;

    /// Return type of a raw native declaration.
    fn raw_return_type(&self, ty: &CType) -> String;

    /// One parameter of a raw native declaration, attributes included.
    fn raw_param(&self, param: &Param) -> String;

    /// One parameter of a bridge declaration.
    fn bridge_param(&self, param: &Param) -> String {
        format!("{} {}", self.bridge_type(&param.ty), param.name)
    }
}
