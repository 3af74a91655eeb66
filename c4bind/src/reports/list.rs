//! List command report data structures.

use super::output::{Output, Report};

/// Functions declared per descriptor file.
#[derive(Debug)]
pub struct ListReport {
    pub files: Vec<ListedFile>,
}

#[derive(Debug)]
pub struct ListedFile {
    /// Descriptor file name.
    pub name: String,
    /// Name of the file it generates.
    pub output: String,
    pub functions: Vec<ListedFunction>,
}

#[derive(Debug)]
pub struct ListedFunction {
    pub name: String,
    /// "bridge" or "raw".
    pub binding: &'static str,
    pub bridge_literal: bool,
    pub raw_literal: bool,
}

impl ListedFunction {
    fn describe(&self) -> String {
        let literals: Vec<&str> = [
            (self.bridge_literal, "bridge literal"),
            (self.raw_literal, "raw literal"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect();

        if literals.is_empty() {
            format!("{} ({})", self.name, self.binding)
        } else {
            format!("{} ({}; {})", self.name, self.binding, literals.join(", "))
        }
    }
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.files.is_empty() {
            out.preformatted("No descriptor files found");
            return;
        }

        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                out.newline();
            }
            out.section(&format!(
                "{} -> {} ({})",
                file.name,
                file.output,
                file.functions.len()
            ));
            for function in &file.functions {
                out.list_item(&function.describe());
            }
        }
    }
}
