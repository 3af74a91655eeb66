use std::path::{Path, PathBuf};

use c4bind_codegen::{
    CodeBuilder, GenerateResult, LanguageCodegen, PreviewFile, language::WrittenFile,
};
use c4bind_core::GeneratedFile;
use c4bind_descriptor::{Binding, Descriptor, DescriptorFile, Literals, TemplateConfig};
use chrono::Datelike;
use eyre::Result;

use crate::{
    ast::{BridgeFn, RawFn, dll_import},
    files::NativeCs,
};

/// Member declarations sit inside a namespace and a class.
const MEMBER_LEVEL: usize = 2;

/// Which of the two declaration kinds a piece of output is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Managed wrapper with a body
    Bridge,
    /// `extern` entry point
    Raw,
}

/// One rendered declaration, trailing blank line included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub layer: Layer,
    /// Whether the text came from a literal catalog.
    pub literal: bool,
    pub text: String,
}

/// The contents of both classes of one output file, in descriptor order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedFile {
    /// Members of `Native`: bridge wrappers and raw-only externs.
    pub native: Vec<Declaration>,
    /// Members of `NativeRaw`: the externs bridge wrappers call.
    pub native_raw: Vec<Declaration>,
}

impl RenderedFile {
    pub fn native_text(&self) -> String {
        self.native.iter().map(|d| d.text.as_str()).collect()
    }

    pub fn native_raw_text(&self) -> String {
        self.native_raw.iter().map(|d| d.text.as_str()).collect()
    }
}

/// C# generator for one descriptor file.
pub struct Generator<'a> {
    file: &'a DescriptorFile,
    literals: &'a Literals,
    template: &'a TemplateConfig,
    year: i32,
}

impl LanguageCodegen for Generator<'_> {
    fn language(&self) -> &'static str {
        "csharp"
    }

    fn file_extension(&self) -> &'static str {
        "cs"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.output_name(),
            content: self.native_cs().render(),
        }]
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let file = self.native_cs();
        let path = file.path(output_dir);
        let result = file.write(output_dir)?;
        tracing::info!(path = %path.display(), ?result, "wrote bindings");

        Ok(GenerateResult {
            files: vec![WrittenFile { path, result }],
        })
    }
}

impl<'a> Generator<'a> {
    /// Create a generator stamped with the current year.
    pub fn new(
        file: &'a DescriptorFile,
        literals: &'a Literals,
        template: &'a TemplateConfig,
    ) -> Self {
        Self {
            file,
            literals,
            template,
            year: chrono::Local::now().year(),
        }
    }

    /// Stamp the copyright header with a fixed year.
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Output file name: the descriptor file name minus its last
    /// extension, or plus `.cs` when it has none.
    pub fn output_name(&self) -> String {
        let path = self.file.path();
        c4bind_core::output_path(path)
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| {
                let stem = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                format!("{}.{}", stem, self.file_extension())
            })
    }

    /// Output path inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.output_name())
    }

    /// Render every descriptor line into its layers.
    pub fn render(&self) -> RenderedFile {
        let mut rendered = RenderedFile::default();

        for descriptor in self.file.descriptors() {
            match descriptor.binding {
                Binding::Bridge => {
                    rendered.native.push(self.bridge_declaration(descriptor));
                    rendered.native_raw.push(self.raw_declaration(descriptor));
                }
                Binding::RawOnly => {
                    rendered.native.push(self.raw_declaration(descriptor));
                }
            }
        }

        tracing::debug!(
            file = %self.file.path().display(),
            native = rendered.native.len(),
            native_raw = rendered.native_raw.len(),
            "rendered declarations"
        );
        rendered
    }

    fn native_cs(&self) -> NativeCs<'a> {
        let rendered = self.render();
        NativeCs::new(
            self.output_name(),
            self.year,
            self.template,
            rendered.native_text(),
            rendered.native_raw_text(),
        )
    }

    fn bridge_declaration(&self, descriptor: &Descriptor) -> Declaration {
        let name = descriptor.name.as_str();
        if let Some(text) = self.literals.bridge.get(name) {
            tracing::trace!(name, "bridge literal");
            return Declaration {
                name: name.to_string(),
                layer: Layer::Bridge,
                literal: true,
                text: text.to_string(),
            };
        }

        let mut builder = CodeBuilder::csharp().at_level(MEMBER_LEVEL);
        if let Some(signature) = descriptor.signature() {
            builder.emit(&BridgeFn::new(name, signature));
        }

        Declaration {
            name: name.to_string(),
            layer: Layer::Bridge,
            literal: false,
            text: builder.build(),
        }
    }

    fn raw_declaration(&self, descriptor: &Descriptor) -> Declaration {
        let name = descriptor.name.as_str();
        let library = self.template.library.as_str();
        let mut builder = CodeBuilder::csharp().at_level(MEMBER_LEVEL);

        // A literal replaces everything after the import attribute.
        let literal = match self.literals.raw.get(name) {
            Some(text) => {
                tracing::trace!(name, "raw literal");
                builder.push_line(&dll_import(library)).push_raw(text);
                true
            }
            None => {
                if let Some(signature) = descriptor.signature() {
                    builder.emit(&RawFn::new(name, signature, library));
                }
                false
            }
        };

        Declaration {
            name: name.to_string(),
            layer: Layer::Raw,
            literal,
            text: builder.build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use c4bind_descriptor::LiteralCatalog;

    use super::*;

    fn parse(content: &str, literals: &Literals) -> DescriptorFile {
        DescriptorFile::parse(content, "C4Test_native.cs.template", literals).unwrap()
    }

    #[test]
    fn test_routing() {
        let literals = Literals::default();
        let template = TemplateConfig::default();
        let file = parse(
            ".bridge .C4Key* c4key_withBytes C4Slice_b:bytes\n.raw .void c4key_free C4Key*:key\n",
            &literals,
        );

        let rendered = Generator::new(&file, &literals, &template).render();

        let native: Vec<_> = rendered.native.iter().map(|d| (d.name.as_str(), d.layer)).collect();
        assert_eq!(
            native,
            [("c4key_withBytes", Layer::Bridge), ("c4key_free", Layer::Raw)]
        );
        let raw: Vec<_> = rendered.native_raw.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(raw, ["c4key_withBytes"]);
        assert!(rendered.native[1].text.contains("public static extern void c4key_free(C4Key* key);"));
    }

    #[test]
    fn test_literals_replace_rendering() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4fn\n        // bridge override\n\n"),
            LiteralCatalog::parse("c4fn\n        // raw override\n\n"),
        );
        let template = TemplateConfig::default();
        let file = parse(".bridge .bool c4fn not even params\n", &literals);

        let rendered = Generator::new(&file, &literals, &template).render();

        assert_eq!(rendered.native[0].text, "        // bridge override\n\n");
        assert!(rendered.native[0].literal);
        assert_eq!(
            rendered.native_raw[0].text,
            "        [DllImport(Constants.DllName, CallingConvention = CallingConvention.Cdecl)]\n        // raw override\n\n"
        );
    }

    #[test]
    fn test_bridge_literal_only() {
        let literals = Literals::new(
            LiteralCatalog::parse("c4fn\n        // custom\n"),
            LiteralCatalog::default(),
        );
        let template = TemplateConfig::default();
        let file = parse(".bridge .bool c4fn C4Slice:s\n", &literals);

        let rendered = Generator::new(&file, &literals, &template).render();

        assert_eq!(rendered.native[0].text, "        // custom\n");
        assert!(!rendered.native_raw[0].literal);
        assert!(rendered.native_raw[0].text.contains("public static extern bool c4fn(C4Slice s);"));
    }

    #[test]
    fn test_output_name() {
        let literals = Literals::default();
        let template = TemplateConfig::default();
        let file = parse("", &literals);
        let generator = Generator::new(&file, &literals, &template);

        assert_eq!(generator.output_name(), "C4Test_native.cs");
        assert_eq!(
            generator.output_path(Path::new("out")),
            PathBuf::from("out/C4Test_native.cs")
        );

        let bare = DescriptorFile::parse("", "Bare", &literals).unwrap();
        assert_eq!(Generator::new(&bare, &literals, &template).output_name(), "Bare.cs");
    }

    #[test]
    fn test_preview_uses_year() {
        let literals = Literals::default();
        let template = TemplateConfig::default();
        let file = parse(".raw .void c4_shutdown\n", &literals);

        let preview = Generator::new(&file, &literals, &template)
            .with_year(1999)
            .preview();

        assert_eq!(preview.len(), 1);
        assert_eq!(preview[0].path, "C4Test_native.cs");
        assert!(preview[0].content.contains("Copyright (c) 1999 Couchbase, Inc"));
    }
}
