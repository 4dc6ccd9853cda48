//! Generation job inputs.
//!
//! Gathers every file the generation step depends on so the host build
//! system reruns the generator when any of them changes. The lists are
//! checked before anything is written: a missing input aborts configuration.

use std::path::{Path, PathBuf};

use crate::{Error, InputRole, Result};

/// The files one generation job depends on, grouped by role.
#[derive(Debug, Clone, Default)]
pub struct JobSpec {
    pub generator: PathBuf,
    pub support_files: Vec<PathBuf>,
    pub templates: Vec<PathBuf>,
    pub idl_files: Vec<PathBuf>,
    pub dependency_files: Vec<PathBuf>,
}

/// A tracked input of the generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobInput {
    pub path: PathBuf,
    pub role: InputRole,
}

/// The ordered, verified input list of a generation job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobInputs {
    inputs: Vec<JobInput>,
}

impl JobInputs {
    /// Tracked inputs in order.
    pub fn iter(&self) -> impl Iterator<Item = &JobInput> {
        self.inputs.iter()
    }

    /// Tracked input paths in order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.inputs.iter().map(|input| input.path.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl JobSpec {
    /// Inputs in tracking order without checking that they exist.
    pub fn inputs(&self) -> Vec<JobInput> {
        let generator = std::iter::once((&self.generator, InputRole::Generator));
        let groups = [
            (&self.support_files, InputRole::SupportFile),
            (&self.templates, InputRole::Template),
            (&self.idl_files, InputRole::InterfaceFile),
            (&self.dependency_files, InputRole::DependencyInterface),
        ];

        generator
            .chain(
                groups
                    .into_iter()
                    .flat_map(|(paths, role)| paths.iter().map(move |path| (path, role))),
            )
            .map(|(path, role)| JobInput {
                path: path.clone(),
                role,
            })
            .collect()
    }
}

/// Build the input list of a generation job.
///
/// Order: generator, support files, templates, own interface files,
/// dependency interface files. Fails on the first input that does not exist.
pub fn build_job(spec: &JobSpec) -> Result<JobInputs> {
    let inputs = spec.inputs();

    if let Some(missing) = inputs.iter().find(|input| !exists(&input.path)) {
        tracing::debug!(path = %missing.path.display(), role = %missing.role, "missing generation input");
        return Err(Error::MissingInput {
            path: missing.path.clone(),
            role: missing.role,
        });
    }

    tracing::debug!(inputs = inputs.len(), "generation inputs verified");
    Ok(JobInputs { inputs })
}

fn exists(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &TempDir, relative: &str) -> PathBuf {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path
    }

    fn spec(dir: &TempDir) -> JobSpec {
        JobSpec {
            generator: touch(dir, "bin/generator"),
            support_files: vec![touch(dir, "lib/__init__.py")],
            templates: vec![touch(dir, "resource/msg.hpp.em"), touch(dir, "resource/srv.hpp.em")],
            idl_files: vec![touch(dir, "my_msgs/msg/Foo.idl")],
            dependency_files: vec![touch(dir, "std_msgs/msg/String.idl")],
        }
    }

    #[test]
    fn test_input_order() {
        let dir = TempDir::new().unwrap();
        let inputs = build_job(&spec(&dir)).unwrap();

        let roles: Vec<InputRole> = inputs.iter().map(|input| input.role).collect();
        assert_eq!(
            roles,
            vec![
                InputRole::Generator,
                InputRole::SupportFile,
                InputRole::Template,
                InputRole::Template,
                InputRole::InterfaceFile,
                InputRole::DependencyInterface,
            ]
        );
        assert_eq!(inputs.paths()[0], dir.path().join("bin/generator"));
        assert_eq!(inputs.paths()[5], dir.path().join("std_msgs/msg/String.idl"));
    }

    #[test]
    fn test_missing_template() {
        let dir = TempDir::new().unwrap();
        let mut spec = spec(&dir);
        let missing = dir.path().join("resource/action.hpp.em");
        spec.templates.push(missing.clone());

        let err = build_job(&spec).unwrap_err();

        match err {
            Error::MissingInput { path, role } => {
                assert_eq!(path, missing);
                assert_eq!(role, InputRole::Template);
            }
            other => panic!("expected missing input, got {other:?}"),
        }
    }

    #[test]
    fn test_first_missing_input_reported() {
        let dir = TempDir::new().unwrap();
        let mut spec = spec(&dir);
        spec.generator = dir.path().join("bin/absent");
        spec.idl_files.push(dir.path().join("my_msgs/msg/Absent.idl"));

        let err = build_job(&spec).unwrap_err();
        assert!(err.to_string().contains("bin/absent"));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_directory_is_not_an_input() {
        let dir = TempDir::new().unwrap();
        let mut spec = spec(&dir);
        spec.support_files.push(dir.path().join("lib"));

        assert!(matches!(
            build_job(&spec),
            Err(Error::MissingInput {
                role: InputRole::SupportFile,
                ..
            })
        ));
    }
}
