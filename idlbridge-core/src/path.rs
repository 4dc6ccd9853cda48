//! Lexical path normalization.

use std::path::{Component, Path, PathBuf};

/// Normalize a path lexically.
///
/// Removes `.` segments and resolves `..` against the preceding normal
/// segment. Symlinks are not resolved and the filesystem is never touched,
/// so the result is stable for paths that do not exist yet. A `..` that would
/// climb above the root of an absolute path is dropped; on a relative path
/// it is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}
