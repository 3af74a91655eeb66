//! Project configuration (`c4bind.toml`).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Error, Result, SourceContext};

/// Root of `c4bind.toml`. Every field has a default, so the file is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Input discovery and literal catalogs
    pub generator: GeneratorConfig,
    /// Values substituted into the output template
    pub template: TemplateConfig,
}

/// `[generator]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Extension of descriptor files, without the dot
    pub extension: String,
    /// Bridge-layer literal catalog, relative to the input directory
    pub bridge_literals: PathBuf,
    /// Raw-layer literal catalog, relative to the input directory
    pub raw_literals: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            extension: "template".to_string(),
            bridge_literals: PathBuf::from("bridge_literals.txt"),
            raw_literals: PathBuf::from("raw_literals.txt"),
        }
    }
}

impl GeneratorConfig {
    /// The extension with any leading dot removed.
    pub fn extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// `[template]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplateConfig {
    /// C# namespace of the generated classes
    pub namespace: String,
    /// Expression naming the native library in `[DllImport(...)]`
    pub library: String,
    /// Copyright holder in the file header
    pub copyright: String,
    /// Author line in the file header; omitted when unset
    pub author: Option<String>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            namespace: "LiteCore.Interop".to_string(),
            library: "Constants.DllName".to_string(),
            copyright: "Couchbase, Inc".to_string(),
            author: None,
        }
    }
}

impl Config {
    /// Default configuration file name, looked up in the input directory.
    pub const FILE_NAME: &'static str = "c4bind.toml";

    /// Load a configuration file. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_str_with_filename(&content, &path.display().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Parse configuration text with a filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SourceContext::new(content, filename).config_error(e))
    }
}
