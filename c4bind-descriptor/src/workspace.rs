//! A directory of descriptor files with its configuration and catalogs.

use std::path::{Path, PathBuf};

use crate::{Config, DescriptorFile, Error, Literals, Result};

/// The input directory of a generator run.
///
/// Configuration and literal catalogs are loaded once when the workspace
/// is opened; descriptor files are parsed one at a time on request.
#[derive(Debug)]
pub struct Workspace {
    dir: PathBuf,
    config: Config,
    literals: Literals,
}

impl Workspace {
    /// Open a directory.
    ///
    /// `config_path` defaults to `c4bind.toml` inside `dir`; either way a
    /// missing file means default configuration.
    pub fn open(dir: impl AsRef<Path>, config_path: Option<&Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        let config_path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| dir.join(Config::FILE_NAME));
        let config = Config::load(&config_path)?;
        let literals = Literals::load(&dir, &config.generator)?;

        Ok(Self {
            dir,
            config,
            literals,
        })
    }

    /// Create a workspace from already-loaded parts.
    pub fn new(dir: impl Into<PathBuf>, config: Config, literals: Literals) -> Self {
        Self {
            dir: dir.into(),
            config,
            literals,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn literals(&self) -> &Literals {
        &self.literals
    }

    /// Descriptor files in the directory, sorted by path.
    pub fn descriptor_paths(&self) -> Result<Vec<PathBuf>> {
        let extension = self.config.generator.extension();
        let entries = std::fs::read_dir(&self.dir).map_err(|e| Error::io(&self.dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| Error::io(&self.dir, e))?.path();
            let matches = path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == extension);
            if matches {
                paths.push(path);
            }
        }

        paths.sort();
        Ok(paths)
    }

    /// Parse one descriptor file against this workspace's catalogs.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<DescriptorFile> {
        DescriptorFile::open(path, &self.literals)
    }
}
