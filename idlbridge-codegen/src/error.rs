use std::{path::PathBuf, process::ExitStatus};

use idlbridge_core::InterfaceError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// What a tracked input is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRole {
    /// The generator program
    Generator,
    /// A file the generator loads besides its templates
    SupportFile,
    /// A generator template
    Template,
    /// One of the package's own interface files
    InterfaceFile,
    /// An interface file of a dependency package
    DependencyInterface,
}

impl std::fmt::Display for InputRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let role = match self {
            InputRole::Generator => "generator",
            InputRole::SupportFile => "generator support file",
            InputRole::Template => "template",
            InputRole::InterfaceFile => "interface file",
            InputRole::DependencyInterface => "dependency interface file",
        };
        f.write_str(role)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("target dependency '{path}' does not exist ({role})")]
    #[diagnostic(
        code(idlbridge::missing_input),
        help("every input of the generation step must exist before anything is generated")
    )]
    MissingInput { path: PathBuf, role: InputRole },

    #[error("package '{name}' is not known to the package index")]
    #[diagnostic(code(idlbridge::unknown_package))]
    UnknownPackage { name: String },

    #[error("'{}' and '{}' both generate '{}'", first.display(), second.display(), path.display())]
    #[diagnostic(
        code(idlbridge::output_collision),
        help("rename one of the interfaces so their lower case names differ")
    )]
    OutputCollision {
        path: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },

    #[error(transparent)]
    #[diagnostic(code(idlbridge::invalid_interface))]
    Interface(#[from] InterfaceError),

    #[error("generator '{}' failed ({status})\n{stderr}{stdout}", program.display())]
    #[diagnostic(code(idlbridge::generator_failed))]
    GeneratorFailed {
        program: PathBuf,
        status: ExitStatus,
        stdout: String,
        stderr: String,
    },

    #[error("generator finished but did not produce '{}'", path.display())]
    #[diagnostic(
        code(idlbridge::output_not_produced),
        help("the declared outputs and the generator's templates are out of sync")
    )]
    OutputNotProduced { path: PathBuf },

    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize generator arguments")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
