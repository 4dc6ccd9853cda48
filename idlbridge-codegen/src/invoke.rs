//! Running the external generator.

use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    process::Command,
    time::SystemTime,
};

use idlbridge_manifest::Language;

use crate::{Error, Result};

/// Flag the generator reads its arguments file from.
pub const ARGUMENTS_FILE_FLAG: &str = "--generator-arguments-file";

/// A build action producing the generated sources of one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationAction {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Files whose change reruns the action (includes the arguments file).
    pub inputs: Vec<PathBuf>,
    /// Files the action must produce.
    pub outputs: Vec<PathBuf>,
    pub working_dir: PathBuf,
    pub comment: String,
}

impl GenerationAction {
    /// Describe the invocation of a generator.
    ///
    /// With an interpreter the generator path becomes its first argument.
    pub fn new(
        language: Language,
        generator: &Path,
        interpreter: Option<&Path>,
        arguments_file: &Path,
        job_inputs: Vec<PathBuf>,
        outputs: Vec<PathBuf>,
        working_dir: impl Into<PathBuf>,
    ) -> Self {
        let (program, mut args) = match interpreter {
            Some(interpreter) => (
                interpreter.to_path_buf(),
                vec![generator.as_os_str().to_os_string()],
            ),
            None => (generator.to_path_buf(), Vec::new()),
        };
        args.push(ARGUMENTS_FILE_FLAG.into());
        args.push(arguments_file.as_os_str().to_os_string());

        let mut inputs = job_inputs;
        inputs.push(arguments_file.to_path_buf());

        Self {
            program,
            args,
            inputs,
            outputs,
            working_dir: working_dir.into(),
            comment: comment_for(language),
        }
    }

    /// The command line as it would be typed in a shell.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_os_str())
            .chain(self.args.iter().map(OsString::as_os_str))
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn comment_for(language: Language) -> String {
    let name = match language {
        Language::Cpp => "C++",
        Language::CSharp => "C#",
    };
    format!("Generating {name} code for ROS interfaces")
}

/// Whether an action has to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// A declared output does not exist yet.
    MissingOutput(PathBuf),
    /// An input changed after the outputs were produced.
    InputNewer(PathBuf),
    UpToDate,
}

impl Staleness {
    pub fn is_stale(&self) -> bool {
        !matches!(self, Staleness::UpToDate)
    }
}

/// Decide whether an action is out of date.
///
/// Stale when any output is missing or any input is not older than the
/// oldest output. Inputs whose modification time cannot be read count as
/// newer.
pub fn staleness(action: &GenerationAction) -> Staleness {
    let mut oldest_output: Option<SystemTime> = None;

    for output in &action.outputs {
        match modified(output) {
            Some(time) => {
                oldest_output = Some(oldest_output.map_or(time, |oldest| oldest.min(time)));
            }
            None => return Staleness::MissingOutput(output.clone()),
        }
    }

    let Some(oldest_output) = oldest_output else {
        return Staleness::UpToDate;
    };

    for input in &action.inputs {
        match modified(input) {
            Some(time) if time < oldest_output => {}
            _ => return Staleness::InputNewer(input.clone()),
        }
    }

    Staleness::UpToDate
}

fn modified(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).and_then(|meta| meta.modified()).ok()
}

/// Output of a successful generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutcome {
    pub stdout: String,
    pub stderr: String,
}

/// Run the generator and wait for it to exit.
///
/// A non-zero exit fails with the generator's output verbatim. A successful
/// exit that leaves a declared output missing fails too.
pub fn run(action: &GenerationAction) -> Result<RunOutcome> {
    tracing::info!(command = %action.command_line(), "{}", action.comment);

    let output = Command::new(&action.program)
        .args(&action.args)
        .current_dir(&action.working_dir)
        .output()
        .map_err(|source| Error::io(&action.program, source))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        tracing::debug!(stderr = %stderr, stdout = %stdout, "generator output");
        return Err(Error::GeneratorFailed {
            program: action.program.clone(),
            status: output.status,
            stdout,
            stderr,
        });
    }

    if !stdout.is_empty() {
        tracing::debug!(stdout = %stdout, "generator output");
    }

    if let Some(missing) = action.outputs.iter().find(|path| !path.is_file()) {
        return Err(Error::OutputNotProduced {
            path: missing.clone(),
        });
    }

    Ok(RunOutcome { stdout, stderr })
}
