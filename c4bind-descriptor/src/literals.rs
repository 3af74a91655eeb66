//! Literal override catalogs.
//!
//! A catalog maps a function name to hand-written C# that replaces the
//! generated declaration. The file format is a key line (no leading
//! whitespace) followed by the indented body lines that belong to it:
//!
//! ```text
//! c4indexer_emit
//!         public static bool c4indexer_emit(...)
//!         {
//!             ...
//!         }
//!
//! c4key_new
//!         public static extern C4Key* c4key_new();
//! ```

use std::path::Path;

use indexmap::IndexMap;

use crate::{Binding, Error, Result, config::GeneratorConfig};

/// Function name to verbatim replacement text, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralCatalog {
    entries: IndexMap<String, String>,
}

impl LiteralCatalog {
    /// Parse catalog text.
    ///
    /// Lines before the first key are ignored. Body lines keep their
    /// indentation and newline.
    pub fn parse(content: &str) -> Self {
        let mut entries = IndexMap::new();
        let mut current: Option<(String, String)> = None;

        for line in content.split_inclusive('\n') {
            if is_key_line(line) {
                if let Some((key, body)) = current.take() {
                    entries.insert(key, body);
                }
                current = Some((line.trim_end().to_string(), String::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push_str(line);
            }
        }

        if let Some((key, body)) = current {
            entries.insert(key, body);
        }

        Self { entries }
    }

    /// Load a catalog file. A missing file is an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let catalog = Self::parse(&content);
                tracing::debug!(
                    path = %path.display(),
                    entries = catalog.len(),
                    "loaded literal catalog"
                );
                Ok(catalog)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no literal catalog");
                Ok(Self::default())
            }
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Get the replacement text for a function.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Check if the catalog overrides a function.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Function names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Keys need at least two characters excluding the line ending, so a
// two-character name on a final line without a newline is still a key.
fn is_key_line(line: &str) -> bool {
    let content = line.trim_end_matches(['\n', '\r']);
    !content.starts_with(char::is_whitespace) && content.chars().count() > 1
}

/// The bridge and raw catalogs, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct Literals {
    /// Replacements for bridge-layer declarations.
    pub bridge: LiteralCatalog,
    /// Replacements for raw-layer declarations.
    pub raw: LiteralCatalog,
}

impl Literals {
    /// Create from already-parsed catalogs.
    pub fn new(bridge: LiteralCatalog, raw: LiteralCatalog) -> Self {
        Self { bridge, raw }
    }

    /// Load both catalogs, resolving their paths against `dir`.
    pub fn load(dir: &Path, config: &GeneratorConfig) -> Result<Self> {
        Ok(Self {
            bridge: LiteralCatalog::load(dir.join(&config.bridge_literals))?,
            raw: LiteralCatalog::load(dir.join(&config.raw_literals))?,
        })
    }

    /// Whether every layer a line of this binding contributes to is
    /// replaced by a literal, so its signature never needs to be read.
    pub fn covers(&self, binding: Binding, name: &str) -> bool {
        let raw = self.raw.contains(name);
        match binding {
            Binding::Bridge => raw && self.bridge.contains(name),
            Binding::RawOnly => raw,
        }
    }
}
