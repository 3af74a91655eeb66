//! Generate command report data structures.

use std::path::PathBuf;

use c4bind_codegen::{PreviewFile, language::WrittenFile, validate::Diagnostic};
use c4bind_core::WriteResult;

use super::{
    describe,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Directory the descriptors were read from.
    pub dir: PathBuf,
    /// Lint warnings over the descriptor files that were processed.
    pub warnings: Vec<Diagnostic>,
    /// Files written to disk.
    pub written: Vec<WrittenFile>,
    /// Files that would be written, in dry-run mode.
    pub previews: Vec<PreviewFile>,
    pub dry_run: bool,
    /// The error that stopped the run; files before it are kept.
    pub aborted: Option<Box<c4bind_descriptor::Error>>,
}

impl GenerateReport {
    pub fn new(dir: impl Into<PathBuf>, dry_run: bool) -> Self {
        Self {
            dir: dir.into(),
            warnings: Vec::new(),
            written: Vec::new(),
            previews: Vec::new(),
            dry_run,
            aborted: None,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(&describe(warning));
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        if self.dry_run {
            self.render_preview(out);
        } else {
            self.render_written(out);
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output) {
        if self.written.is_empty() {
            out.preformatted(&format!(
                "No descriptor files found in {}",
                self.dir.display()
            ));
            return;
        }

        out.section(&format!("Generated ({})", self.written.len()));
        for file in &self.written {
            let name = file.path.display().to_string();
            match file.result {
                WriteResult::Created => out.added_item(&name),
                WriteResult::Overwritten => out.changed_item(&name),
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output) {
        for file in &self.previews {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            self.previews.len()
        ));
    }
}
