//! List operation - functions per descriptor file.

use c4bind_codegen_csharp::Generator;
use c4bind_descriptor::{Binding, Result, Workspace};

use crate::reports::{ListReport, ListedFile, ListedFunction};

/// Execute the list operation.
pub fn list(workspace: &Workspace) -> Result<ListReport> {
    let literals = workspace.literals();
    let mut files = Vec::new();

    for path in workspace.descriptor_paths()? {
        let file = workspace.load(&path)?;
        let output = Generator::new(&file, literals, &workspace.config().template).output_name();

        let functions = file
            .descriptors()
            .iter()
            .map(|d| ListedFunction {
                name: d.name.clone(),
                binding: d.binding.as_str(),
                bridge_literal: d.binding == Binding::Bridge && literals.bridge.contains(&d.name),
                raw_literal: literals.raw.contains(&d.name),
            })
            .collect();

        files.push(ListedFile {
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            output,
            functions,
        });
    }

    Ok(ListReport { files })
}
