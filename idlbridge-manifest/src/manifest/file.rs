use std::path::{Path, PathBuf};

use super::{Manifest, parse::config_root};
use crate::Result;

/// An idlbridge.toml file and its parsed manifest.
pub struct IdlbridgeToml {
    path: PathBuf,
    manifest: Manifest,
}

impl IdlbridgeToml {
    /// Open and parse an idlbridge.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(crate::Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest =
            Manifest::from_str_with_filename(&content, &filename)?.with_root(config_root(&path)?);

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
