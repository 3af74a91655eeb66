//! Path helpers for descriptor and output files.

use std::path::{Path, PathBuf};

/// Output path for a descriptor: the descriptor path with its last
/// extension removed (`C4Key_native.cs.template` -> `C4Key_native.cs`).
///
/// Returns `None` when the path has no file name or no extension to strip.
pub fn output_path(descriptor: &Path) -> Option<PathBuf> {
    descriptor.extension()?;
    let stem = descriptor.file_stem()?;
    Some(descriptor.with_file_name(stem))
}

/// Name shown in the generated file header.
///
/// The LiteCore binding sources are named after the C API prefix
/// (`C4Key_native.cs`), but their headers carry the name without it
/// (`Key_native.cs`).
pub fn display_name(file_name: &str) -> &str {
    match file_name.strip_prefix("C4") {
        Some(rest) if !rest.is_empty() => rest,
        _ => file_name,
    }
}
