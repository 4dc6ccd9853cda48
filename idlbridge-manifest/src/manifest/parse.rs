//! Manifest parsing from files and strings.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "idlbridge.toml")
    }
}

impl Manifest {
    /// Parse an idlbridge.toml file from the given path.
    ///
    /// Relative paths in the file resolve against the directory containing it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        let manifest = parse_manifest(&content, &path.display().to_string())?;
        Ok(manifest.with_root(config_root(path)?))
    }

    /// Parse an idlbridge.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Absolute directory containing the configuration file.
pub(crate) fn config_root(path: &Path) -> Result<PathBuf> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::path::absolute(dir).map_err(|e| {
        Box::new(Error::Io {
            path: dir.to_path_buf(),
            source: e,
        })
    })
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    ParseContext::new(content, filename).validate_manifest(&manifest)?;
    Ok(manifest)
}
