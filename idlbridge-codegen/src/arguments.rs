//! The generator arguments file.
//!
//! The generator reads everything it needs from one JSON document. Its key
//! names are an external contract shared with the generator.

use std::path::{Path, PathBuf};

use idlbridge_core::{DependencyEdge, File, IdlTuple, Overwrite, WriteResult};
use idlbridge_manifest::Language;
use serde::Serialize;

use crate::{Error, Result};

/// Contents of the generator arguments file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorArguments {
    pub package_name: String,
    /// Own interface files as `"base:relative"`.
    pub idl_tuples: Vec<IdlTuple>,
    /// Dependency interface files as `"package:absolute path"`.
    pub ros_interface_dependencies: Vec<DependencyEdge>,
    pub output_dir: PathBuf,
    pub template_dir: PathBuf,
    /// Every tracked input of the generation step.
    pub target_dependencies: Vec<PathBuf>,
}

impl GeneratorArguments {
    /// Render the arguments as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Default location of the arguments file for a generator variant.
///
/// E.g., `{build_dir}/rosidl_generator_cpp__arguments.json`.
pub fn arguments_file_path(build_dir: &Path, language: Language) -> PathBuf {
    build_dir.join(format!("{}__arguments.json", language.generator_name()))
}

/// Write the arguments file.
///
/// The file is left untouched when its content is unchanged, so its
/// modification time only moves when the arguments do.
pub fn write_arguments(path: &Path, arguments: &GeneratorArguments) -> Result<WriteResult> {
    let json = arguments.to_json()?;
    let result = File::new(path, json)
        .with_overwrite(Overwrite::IfChanged)
        .write()
        .map_err(|source| Error::io(path, source))?;

    match result {
        WriteResult::Written => {
            tracing::info!(path = %path.display(), "wrote generator arguments")
        }
        WriteResult::Skipped => {
            tracing::debug!(path = %path.display(), "generator arguments unchanged")
        }
    }
    Ok(result)
}
