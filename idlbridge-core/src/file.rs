use std::{
    io,
    path::{Path, PathBuf},
};

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (content already up to date)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    Always,
    /// Only rewrite when the content differs, leaving the modification time
    /// of an identical file untouched
    IfChanged,
}

/// A file to be written
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (always overwritten)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Override the overwrite behavior.
    pub fn with_overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file according to its overwrite rule
    pub fn write(&self) -> io::Result<WriteResult> {
        match self.overwrite {
            Overwrite::Always => {
                write_file(&self.path, &self.content)?;
                Ok(WriteResult::Written)
            }
            Overwrite::IfChanged => match std::fs::read_to_string(&self.path) {
                Ok(existing) if existing == self.content => Ok(WriteResult::Skipped),
                _ => {
                    write_file(&self.path, &self.content)?;
                    Ok(WriteResult::Written)
                }
            },
        }
    }
}

fn write_file(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

/// Copy a file, creating the destination's parent directories.
pub fn copy_file(from: &Path, to: &Path) -> io::Result<()> {
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::copy(from, to)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "updated");
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_changed_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("new.json");

        let file = File::new(&path, "{}").with_overwrite(Overwrite::IfChanged);

        assert!(!file.exists());
        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_file_write_if_changed_skips_identical() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("same.json");
        fs::write(&path, "{}").unwrap();

        let file = File::new(&path, "{}").with_overwrite(Overwrite::IfChanged);

        assert_eq!(file.write().unwrap(), WriteResult::Skipped);
    }

    #[test]
    fn test_file_write_if_changed_rewrites_different() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("edited.json");
        fs::write(&path, "{\"edited\": true}").unwrap();

        let file = File::new(&path, "{}").with_overwrite(Overwrite::IfChanged);

        assert_eq!(file.write().unwrap(), WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_copy_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let from = temp.path().join("foo.hpp");
        let to = temp.path().join("include").join("pkg").join("foo.hpp");
        fs::write(&from, "#pragma once").unwrap();

        copy_file(&from, &to).unwrap();

        assert_eq!(fs::read_to_string(&to).unwrap(), "#pragma once");
    }
}
