//! Output path resolution for generated artifacts.
//!
//! Every output path is a pure function of the interface file path and the
//! output root, so resolving the same inputs twice always yields the same
//! ordered list.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use idlbridge_core::IdlFile;
use idlbridge_manifest::Language;

use crate::{Error, Result};

/// Subdirectory holding the secondary artifacts of an interface.
pub const DETAIL_DIR: &str = "detail";

/// One artifact produced per interface file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactRule {
    /// Subdirectory below the category directory ("" for none).
    pub subdir: &'static str,
    /// Suffix appended to the output stem (e.g., "__struct").
    pub suffix: &'static str,
}

/// The artifacts a generator variant produces for each interface file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactLayout {
    /// Artifact rules, in declaration order.
    pub rules: &'static [ArtifactRule],
    /// File extension without dot.
    pub extension: &'static str,
}

/// C++ header layout.
pub mod cpp {
    use super::{ArtifactLayout, ArtifactRule, DETAIL_DIR};

    /// File extension for generated headers.
    pub const EXTENSION: &str = "hpp";

    /// A top-level header plus builder, struct and traits detail headers.
    pub const LAYOUT: ArtifactLayout = ArtifactLayout {
        rules: &[
            ArtifactRule {
                subdir: "",
                suffix: "",
            },
            ArtifactRule {
                subdir: DETAIL_DIR,
                suffix: "__builder",
            },
            ArtifactRule {
                subdir: DETAIL_DIR,
                suffix: "__struct",
            },
            ArtifactRule {
                subdir: DETAIL_DIR,
                suffix: "__traits",
            },
        ],
        extension: EXTENSION,
    };
}

/// C# source layout.
pub mod csharp {
    use super::{ArtifactLayout, ArtifactRule};

    /// File extension for generated sources.
    pub const EXTENSION: &str = "cs";

    /// One source file per interface.
    pub const LAYOUT: ArtifactLayout = ArtifactLayout {
        rules: &[ArtifactRule {
            subdir: "",
            suffix: "",
        }],
        extension: EXTENSION,
    };
}

impl ArtifactLayout {
    /// Get the layout of a generator variant.
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Cpp => cpp::LAYOUT,
            Language::CSharp => csharp::LAYOUT,
        }
    }

    /// Number of artifacts produced per interface file.
    pub fn artifacts_per_file(&self) -> usize {
        self.rules.len()
    }
}

/// Resolve the output paths generated for one interface file.
///
/// For `msg/Foo.idl` with the C++ layout this yields, in order:
/// `{root}/msg/foo.hpp`, `{root}/msg/detail/foo__builder.hpp`,
/// `{root}/msg/detail/foo__struct.hpp`, `{root}/msg/detail/foo__traits.hpp`.
pub fn resolve_outputs(idl_file: &IdlFile, output_root: &Path, layout: &ArtifactLayout) -> Vec<PathBuf> {
    let category_dir = output_root.join(idl_file.parent_folder());
    let stem = idl_file.output_stem();

    layout
        .rules
        .iter()
        .map(|rule| {
            let file_name = format!("{}{}.{}", stem, rule.suffix, layout.extension);
            if rule.subdir.is_empty() {
                category_dir.join(file_name)
            } else {
                category_dir.join(rule.subdir).join(file_name)
            }
        })
        .collect()
}

/// Resolve the output paths of every interface file of a package.
///
/// Paths keep the order of `idl_files`. Two interface files that map to the
/// same output path (e.g., "msg/GoalID.idl" and "msg/GoalId.idl") are
/// rejected instead of silently overwriting each other.
pub fn resolve_package_outputs(
    idl_files: &[IdlFile],
    output_root: &Path,
    layout: &ArtifactLayout,
) -> Result<Vec<PathBuf>> {
    let mut owners: HashMap<PathBuf, &Path> = HashMap::new();
    let mut outputs = Vec::with_capacity(idl_files.len() * layout.artifacts_per_file());

    for idl_file in idl_files {
        for path in resolve_outputs(idl_file, output_root, layout) {
            if let Some(first) = owners.get(&path) {
                return Err(Error::OutputCollision {
                    path,
                    first: first.to_path_buf(),
                    second: idl_file.path().to_path_buf(),
                });
            }
            owners.insert(path.clone(), idl_file.path());
            outputs.push(path);
        }
    }

    Ok(outputs)
}
