//! Interface library declaration, installation and export.

use std::path::{Path, PathBuf};

use idlbridge_core::{File, Overwrite, copy_file};
use idlbridge_manifest::Language;
use serde::Serialize;
use walkdir::WalkDir;

use crate::{Error, Result, paths::ArtifactLayout};

/// A header-only library exposing the generated sources of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceLibrary {
    pub name: String,
    pub package: String,
    /// Include directory used by consumers inside the build tree. Never part
    /// of an installed export.
    #[serde(skip)]
    pub build_include_dir: PathBuf,
    /// Include directory relative to the install root.
    pub install_include_dir: PathBuf,
    /// Generated libraries of the direct dependencies.
    pub interface_links: Vec<String>,
}

impl InterfaceLibrary {
    /// Declare the generated library of a package.
    ///
    /// The library is named after the package's umbrella `target`. Linking
    /// each direct dependency's library propagates include paths down the
    /// whole dependency chain.
    pub fn new<S: AsRef<str>>(
        package: &str,
        target: &str,
        language: Language,
        build_dir: &Path,
        dependencies: &[S],
    ) -> Self {
        let generator_name = language.generator_name();
        Self {
            name: library_name(target, language),
            package: package.to_string(),
            build_include_dir: build_dir.join(generator_name),
            install_include_dir: Path::new("include").join(package),
            interface_links: dependencies
                .iter()
                .map(|dep| library_name(dep.as_ref(), language))
                .collect(),
        }
    }

    /// Name of the export set the library is exported under.
    pub fn export_set(&self) -> String {
        format!("export_{}", self.name)
    }
}

/// Name of the generated library of an umbrella target
/// (e.g., "std_msgs__rosidl_generator_cpp").
pub fn library_name(target: &str, language: Language) -> String {
    format!("{}__{}", target, language.generator_name())
}

/// Receiver of install-time export declarations.
pub trait ExportSink {
    /// Make an include directory (relative to the install root) discoverable.
    fn export_include_directory(&mut self, dir: &Path) -> Result<()>;

    /// Export a library target under an export set.
    fn export_target(&mut self, library: &InterfaceLibrary, export_set: &str) -> Result<()>;
}

/// An exported library target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedTarget {
    pub export_set: String,
    #[serde(flatten)]
    pub library: InterfaceLibrary,
}

/// Everything exported for a package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Exports {
    pub include_directories: Vec<PathBuf>,
    pub targets: Vec<ExportedTarget>,
}

impl Exports {
    pub fn is_empty(&self) -> bool {
        self.include_directories.is_empty() && self.targets.is_empty()
    }

    fn include_directory(&mut self, dir: &Path) {
        if !self.include_directories.iter().any(|d| d == dir) {
            self.include_directories.push(dir.to_path_buf());
        }
    }

    fn target(&mut self, library: &InterfaceLibrary, export_set: &str) {
        self.targets.retain(|t| t.library.name != library.name);
        self.targets.push(ExportedTarget {
            export_set: export_set.to_string(),
            library: library.clone(),
        });
    }
}

/// Exports kept in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingExports {
    pub exports: Exports,
}

impl RecordingExports {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for RecordingExports {
    fn export_include_directory(&mut self, dir: &Path) -> Result<()> {
        self.exports.include_directory(dir);
        Ok(())
    }

    fn export_target(&mut self, library: &InterfaceLibrary, export_set: &str) -> Result<()> {
        self.exports.target(library, export_set);
        Ok(())
    }
}

/// Exports written to `share/{package}/idlbridge/exports.json` under the
/// install root.
#[derive(Debug, Clone)]
pub struct FileExports {
    path: PathBuf,
    exports: Exports,
}

impl FileExports {
    pub fn new(install_root: &Path, package: &str) -> Self {
        Self {
            path: install_root
                .join("share")
                .join(package)
                .join("idlbridge")
                .join("exports.json"),
            exports: Exports::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.exports)?;
        File::new(&self.path, json)
            .with_overwrite(Overwrite::IfChanged)
            .write()
            .map_err(|source| Error::io(&self.path, source))?;
        Ok(())
    }
}

impl ExportSink for FileExports {
    fn export_include_directory(&mut self, dir: &Path) -> Result<()> {
        self.exports.include_directory(dir);
        self.flush()
    }

    fn export_target(&mut self, library: &InterfaceLibrary, export_set: &str) -> Result<()> {
        self.exports.target(library, export_set);
        self.flush()
    }
}

/// What an install step did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Installed files, relative to the install root.
    pub copied: Vec<PathBuf>,
    /// Whether the include directory and target were exported.
    pub exported: bool,
}

impl InstallReport {
    pub fn skipped(&self) -> bool {
        self.copied.is_empty() && !self.exported
    }
}

/// Install the generated sources and export the library.
///
/// Every file below `output_dir` with the layout's extension is copied to
/// `{install_root}/include/{package}/{package}/<relative path>`. With
/// `skip_install` nothing is copied and nothing is exported.
pub fn install(
    library: &InterfaceLibrary,
    output_dir: &Path,
    install_root: &Path,
    layout: &ArtifactLayout,
    sink: &mut dyn ExportSink,
    skip_install: bool,
) -> Result<InstallReport> {
    if skip_install {
        tracing::debug!(library = %library.name, "install skipped");
        return Ok(InstallReport::default());
    }

    let destination = library.install_include_dir.join(&library.package);
    let mut copied = Vec::new();

    for source in installable_files(output_dir, layout.extension)? {
        let relative = source.strip_prefix(output_dir).unwrap_or(&source);
        let installed = destination.join(relative);
        let target = install_root.join(&installed);
        copy_file(&source, &target).map_err(|err| Error::io(&target, err))?;
        copied.push(installed);
    }

    sink.export_include_directory(&library.install_include_dir)?;
    sink.export_target(library, &library.export_set())?;

    tracing::info!(
        library = %library.name,
        files = copied.len(),
        install_root = %install_root.display(),
        "installed interface library"
    );

    Ok(InstallReport {
        copied,
        exported: true,
    })
}

/// Files below `dir` with the given extension, sorted by path.
fn installable_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(dir).to_path_buf();
            Error::io(path, err.into())
        })?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }
    Ok(files)
}
