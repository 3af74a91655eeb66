use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file to disk, replacing whatever is already there
    fn write(&self, base: &Path) -> Result<WriteResult> {
        let path = self.path(base);
        let existed = path.exists();

        write_file(&path, &self.render())
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;

        if existed {
            Ok(WriteResult::Overwritten)
        } else {
            Ok(WriteResult::Created)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist before
    Created,
    /// An earlier output was replaced
    Overwritten,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Greeting(&'static str);

    impl GeneratedFile for Greeting {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("out").join("greeting.txt")
        }

        fn render(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_reports_created_then_overwritten() {
        let temp = TempDir::new().unwrap();

        let first = Greeting("hello").write(temp.path()).unwrap();
        assert_eq!(first, WriteResult::Created);

        let second = Greeting("goodbye").write(temp.path()).unwrap();
        assert_eq!(second, WriteResult::Overwritten);

        let written = fs::read_to_string(temp.path().join("out/greeting.txt")).unwrap();
        assert_eq!(written, "goodbye");
    }
}
