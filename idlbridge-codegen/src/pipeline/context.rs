//! Generation context passed through pipeline phases.

use std::path::PathBuf;

use idlbridge_core::{IdlFile, WriteResult};
use idlbridge_manifest::{Language, Manifest};

use super::diagnostic::Diagnostic;
use crate::{
    arguments::{GeneratorArguments, arguments_file_path},
    dependencies::CollectedDependencies,
    invoke::{GenerationAction, RunOutcome, Staleness},
    job::JobInputs,
    library::{InstallReport, InterfaceLibrary},
    paths::ArtifactLayout,
    targets::{InMemoryRegistry, Registration},
};

/// Switches for one generation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Compute everything but write and run nothing.
    pub dry_run: bool,
    /// Run the generator even when its outputs are up to date.
    pub force: bool,
    /// Skip installation and export (in addition to `[build] skip_install`).
    pub skip_install: bool,
}

/// State of one package/language generation run.
///
/// Each phase fills in its part; later phases read what earlier ones
/// produced.
#[derive(Debug)]
pub struct GenerationContext {
    pub manifest: Manifest,
    pub options: GenerateOptions,
    pub layout: ArtifactLayout,
    /// Target graph the aggregate target is registered in.
    pub targets: InMemoryRegistry,

    /// The package's own interface files.
    pub idl_files: Vec<IdlFile>,
    /// Declared outputs of the package's own interface files.
    pub outputs: Vec<PathBuf>,
    pub dependencies: CollectedDependencies,
    pub inputs: JobInputs,
    pub arguments: Option<GeneratorArguments>,
    pub arguments_written: Option<WriteResult>,
    pub action: Option<GenerationAction>,
    pub staleness: Option<Staleness>,
    pub run: Option<RunOutcome>,
    pub registration: Option<Registration>,
    pub library: Option<InterfaceLibrary>,
    pub install: Option<InstallReport>,

    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(manifest: Manifest, options: GenerateOptions) -> Self {
        let layout = ArtifactLayout::for_language(manifest.generator.language);
        Self {
            manifest,
            options,
            layout,
            targets: InMemoryRegistry::new(),
            idl_files: Vec::new(),
            outputs: Vec::new(),
            dependencies: CollectedDependencies::default(),
            inputs: JobInputs::default(),
            arguments: None,
            arguments_written: None,
            action: None,
            staleness: None,
            run: None,
            registration: None,
            library: None,
            install: None,
            diagnostics: Vec::new(),
        }
    }

    /// Register targets in an existing target graph.
    pub fn with_targets(mut self, targets: InMemoryRegistry) -> Self {
        self.targets = targets;
        self
    }

    pub fn language(&self) -> Language {
        self.manifest.generator.language
    }

    pub fn package_name(&self) -> &str {
        &self.manifest.package.name
    }

    /// Output root of the package (`{build_dir}/{generator_name}/{package}`).
    pub fn output_dir(&self) -> PathBuf {
        self.manifest
            .build_dir()
            .join(self.language().generator_name())
            .join(self.package_name())
    }

    /// Location of the generator arguments file.
    pub fn arguments_file(&self) -> PathBuf {
        arguments_file_path(&self.manifest.build_dir(), self.language())
    }

    pub fn skip_install(&self) -> bool {
        self.options.skip_install || self.manifest.build.skip_install
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_info(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::info(phase, message));
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.severity.is_warning())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_manifest(language: &str) -> Manifest {
        format!(
            r#"
            [package]
            name = "my_msgs"

            [generator]
            language = "{language}"
            executable = "gen"
            template_dir = "resource"

            [build]
            build_dir = "out"
            "#
        )
        .parse::<Manifest>()
        .expect("Failed to parse test manifest")
        .with_root("/ws/my_msgs")
    }

    #[test]
    fn test_context_paths() {
        let ctx = GenerationContext::new(make_test_manifest("cpp"), GenerateOptions::default());

        assert_eq!(
            ctx.output_dir(),
            PathBuf::from("/ws/my_msgs/out/rosidl_generator_cpp/my_msgs")
        );
        assert_eq!(
            ctx.arguments_file(),
            PathBuf::from("/ws/my_msgs/out/rosidl_generator_cpp__arguments.json")
        );
        assert_eq!(ctx.layout.extension, "hpp");
    }

    #[test]
    fn test_context_language_layout() {
        let ctx = GenerationContext::new(make_test_manifest("cs"), GenerateOptions::default());
        assert_eq!(ctx.layout.extension, "cs");
        assert!(ctx.output_dir().ends_with("rosidl_generator_cs/my_msgs"));
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = GenerationContext::new(make_test_manifest("cpp"), GenerateOptions::default());

        ctx.add_warning("compose", "test warning");
        ctx.add_info("invoke", "just info");

        assert_eq!(ctx.diagnostics.len(), 2);
        let warnings: Vec<&str> = ctx.warnings().map(|d| d.message.as_str()).collect();
        assert_eq!(warnings, vec!["test warning"]);
    }

    #[test]
    fn test_skip_install_from_options() {
        let options = GenerateOptions {
            skip_install: true,
            ..Default::default()
        };
        let ctx = GenerationContext::new(make_test_manifest("cpp"), options);
        assert!(ctx.skip_install());
    }
}
