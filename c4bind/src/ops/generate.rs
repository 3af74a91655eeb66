//! Generate operation - one C# file per descriptor file.

use c4bind_codegen::{
    LanguageCodegen,
    validate::{LintContext, Validator},
};
use c4bind_codegen_csharp::Generator;
use c4bind_descriptor::Workspace;
use eyre::{Context, Result};

use crate::reports::GenerateReport;

/// Options for the generate operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Copyright year; the current year when unset.
    pub year: Option<i32>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Descriptor files are handled one at a time in path order. A malformed
/// file stops the run and is recorded in the report; outputs already
/// written stay on disk. I/O failures while writing are returned as errors.
pub fn generate(workspace: &Workspace, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut report = GenerateReport::new(workspace.dir(), opts.dry_run);

    let paths = match workspace.descriptor_paths() {
        Ok(paths) => paths,
        Err(e) => {
            report.aborted = Some(e);
            return Ok(report);
        }
    };

    let template = &workspace.config().template;
    let mut parsed = Vec::with_capacity(paths.len());

    for path in paths {
        let file = match workspace.load(&path) {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!(path = %path.display(), "descriptor file failed to parse");
                report.aborted = Some(e);
                return Ok(report);
            }
        };

        let mut generator = Generator::new(&file, workspace.literals(), template);
        if let Some(year) = opts.year {
            generator = generator.with_year(year);
        }

        if opts.dry_run {
            report.previews.extend(generator.preview());
        } else {
            let result = generator.generate(workspace.dir()).wrap_err_with(|| {
                format!("Failed to generate bindings for '{}'", path.display())
            })?;
            report.written.extend(result.files);
        }

        parsed.push(file);
    }

    let ctx = LintContext::new(&parsed, workspace.literals());
    report.warnings = Validator::new()
        .run(&ctx)
        .into_iter()
        .filter(|d| d.severity.is_warning())
        .collect();

    Ok(report)
}
