//! C# P/Invoke generator for LiteCore.
//!
//! Each descriptor file becomes one C# source file holding two partial
//! classes: `Native`, the managed-friendly surface, and `NativeRaw`, the
//! extern entry points the bridge declarations forward to.

mod generator;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{BridgeFn, RawFn};
pub use c4bind_codegen::{GenerateResult, LanguageCodegen, PreviewFile};
pub use generator::{Declaration, Generator, Layer, RenderedFile};
pub use type_mapper::CSharpTypeMapper;
