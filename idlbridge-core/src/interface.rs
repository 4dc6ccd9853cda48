//! Interface file types shared across the generation pipeline.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{naming::camel_to_underscore, path::normalize_path};

/// Error produced when a path cannot describe an interface file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("interface file '{0}' has no file name")]
    MissingFileName(PathBuf),

    #[error("interface file '{0}' has no parent directory to use as its category")]
    MissingCategory(PathBuf),

    #[error("interface file '{0}' is not valid UTF-8")]
    NonUtf8(PathBuf),
}

/// A resolved interface definition file.
///
/// The category is the name of the directory directly containing the file
/// (e.g., "msg", "srv" or "action") and the type name is its file stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdlFile {
    path: PathBuf,
    type_name: String,
    parent_folder: String,
}

impl IdlFile {
    /// Resolve an interface file from its (absolute) path.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, InterfaceError> {
        let path = path.into();

        let type_name = match path.file_stem() {
            Some(stem) => stem
                .to_str()
                .ok_or_else(|| InterfaceError::NonUtf8(path.clone()))?
                .to_string(),
            None => return Err(InterfaceError::MissingFileName(path)),
        };

        let parent_folder = match path.parent().and_then(Path::file_name) {
            Some(name) => name
                .to_str()
                .ok_or_else(|| InterfaceError::NonUtf8(path.clone()))?
                .to_string(),
            None => return Err(InterfaceError::MissingCategory(path)),
        };

        Ok(Self {
            path,
            type_name,
            parent_folder,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the interface type name (e.g., "NavSatFix").
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get the category directory name (e.g., "msg").
    pub fn parent_folder(&self) -> &str {
        &self.parent_folder
    }

    /// Get the output file stem (e.g., "nav_sat_fix").
    pub fn output_stem(&self) -> String {
        camel_to_underscore(&self.type_name)
    }
}

/// An interface file expressed relative to the directory that owns it.
///
/// Serialized as `"<base>:<relative>"`, the form the generator expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdlTuple {
    base: PathBuf,
    relative: PathBuf,
}

impl IdlTuple {
    pub fn new(base: impl Into<PathBuf>, relative: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            relative: relative.into(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// The normalized absolute location of the file.
    pub fn absolute(&self) -> PathBuf {
        normalize_path(&self.base.join(&self.relative))
    }
}

impl fmt::Display for IdlTuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.base.display(), self.relative.display())
    }
}

impl Serialize for IdlTuple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An interface file contributed by a dependency package.
///
/// Serialized as `"<package>:<absolute path>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyEdge {
    pub package: String,
    pub path: PathBuf,
}

impl DependencyEdge {
    pub fn new(package: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            package: package.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.package, self.path.display())
    }
}

impl Serialize for DependencyEdge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idl_file_parts() {
        let file = IdlFile::new("/ws/src/sensor_msgs/msg/NavSatFix.idl").unwrap();
        assert_eq!(file.type_name(), "NavSatFix");
        assert_eq!(file.parent_folder(), "msg");
        assert_eq!(file.output_stem(), "nav_sat_fix");
    }

    #[test]
    fn test_idl_file_without_category() {
        let err = IdlFile::new("Foo.idl").unwrap_err();
        assert_eq!(err, InterfaceError::MissingCategory(PathBuf::from("Foo.idl")));
    }

    #[test]
    fn test_idl_file_without_name() {
        assert!(matches!(
            IdlFile::new("/"),
            Err(InterfaceError::MissingFileName(_))
        ));
    }

    #[test]
    fn test_idl_tuple_display_and_absolute() {
        let tuple = IdlTuple::new("/ws/src/my_msgs", "msg/../srv/Trigger.idl");
        assert_eq!(tuple.to_string(), "/ws/src/my_msgs:msg/../srv/Trigger.idl");
        assert_eq!(
            tuple.absolute(),
            PathBuf::from("/ws/src/my_msgs/srv/Trigger.idl")
        );
    }

    #[test]
    fn test_dependency_edge_serializes_as_string() {
        let edge = DependencyEdge::new("std_msgs", "/opt/std_msgs/msg/String.idl");
        let json = serde_json::to_string(&edge).unwrap();
        assert_eq!(json, r#""std_msgs:/opt/std_msgs/msg/String.idl""#);
    }
}
