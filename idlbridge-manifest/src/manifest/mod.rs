//! Manifest types and parsing for idlbridge.toml files.

mod file;
mod language;
mod parse;
mod validate;

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

pub use file::IdlbridgeToml;
use idlbridge_core::{IdlTuple, normalize_path};
pub use language::Language;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for idlbridge.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// The package whose interfaces are generated
    pub package: PackageConfig,

    /// The external generator
    pub generator: GeneratorConfig,

    /// Build and install locations
    #[serde(default)]
    pub build: BuildConfig,

    /// Index of dependency packages, keyed by package name
    #[serde(default)]
    pub packages: BTreeMap<String, DependencyPackage>,

    /// Directory relative paths are resolved against
    #[serde(skip, default = "default_root")]
    root: PathBuf,
}

/// The package being generated.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageConfig {
    /// Package name
    pub name: String,

    /// Directory the interface files are relative to
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    /// Interface files, relative to `base_dir` (e.g., "msg/Foo.idl")
    #[serde(default)]
    pub idl_files: Vec<PathBuf>,

    /// Directly declared dependency packages
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Umbrella target that generation for every language hangs off
    /// (defaults to the package name)
    pub target: Option<String>,
}

impl PackageConfig {
    /// Name of the umbrella "generate all languages" target.
    pub fn target_name(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.name)
    }
}

/// A dependency package as resolved by the host build system.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DependencyPackage {
    /// Directory the package's interface files are relative to
    pub base_dir: PathBuf,

    /// Interface files, relative to `base_dir`
    #[serde(default)]
    pub idl_files: Vec<PathBuf>,

    /// The package's own dependencies
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// External generator configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Target language of the generator
    pub language: Language,

    /// Generator program
    pub executable: PathBuf,

    /// Interpreter used to run the generator (e.g., "python3"), looked up on PATH
    pub interpreter: Option<PathBuf>,

    /// Files the generator loads besides its templates
    #[serde(default)]
    pub support_files: Vec<PathBuf>,

    /// Directory holding the generator templates
    pub template_dir: PathBuf,

    /// Template files, relative to `template_dir`
    #[serde(default)]
    pub templates: Vec<PathBuf>,
}

/// Build and install configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildConfig {
    /// Build tree root
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    /// Install tree root
    #[serde(default = "default_install_root")]
    pub install_root: PathBuf,

    /// Skip every install step
    #[serde(default)]
    pub skip_install: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            build_dir: default_build_dir(),
            install_root: default_install_root(),
            skip_install: false,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_build_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_install_root() -> PathBuf {
    PathBuf::from("install")
}

impl Manifest {
    /// Directory relative paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Set the directory relative paths are resolved against.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    /// Resolve a configured path against the manifest root.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        normalize_path(&self.root.join(path))
    }

    /// Check if a dependency package is described in the index.
    pub fn has_package(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    /// Absolute base directory of the generated package.
    pub fn package_dir(&self) -> PathBuf {
        self.resolve(&self.package.base_dir)
    }

    /// The package's own interface files as `(base, relative)` tuples.
    pub fn idl_tuples(&self) -> Vec<IdlTuple> {
        let base = self.package_dir();
        self.package
            .idl_files
            .iter()
            .map(|file| IdlTuple::new(base.clone(), file.clone()))
            .collect()
    }

    /// Absolute path of the generator program.
    pub fn generator_executable(&self) -> PathBuf {
        self.resolve(&self.generator.executable)
    }

    /// Absolute paths of the generator support files.
    pub fn generator_support_files(&self) -> Vec<PathBuf> {
        self.generator
            .support_files
            .iter()
            .map(|file| self.resolve(file))
            .collect()
    }

    /// Absolute path of the template directory.
    pub fn template_dir(&self) -> PathBuf {
        self.resolve(&self.generator.template_dir)
    }

    /// Absolute paths of the template files.
    pub fn template_files(&self) -> Vec<PathBuf> {
        let dir = self.template_dir();
        self.generator
            .templates
            .iter()
            .map(|file| normalize_path(&dir.join(file)))
            .collect()
    }

    /// Absolute build tree root.
    pub fn build_dir(&self) -> PathBuf {
        self.resolve(&self.build.build_dir)
    }

    /// Absolute install tree root.
    pub fn install_root(&self) -> PathBuf {
        self.resolve(&self.build.install_root)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MANIFEST: &str = r#"
        [package]
        name = "my_msgs"
        idl_files = ["msg/Foo.idl", "srv/Bar.idl"]
        dependencies = ["std_msgs"]

        [generator]
        language = "cpp"
        executable = "tools/generator"
        support_files = ["tools/lib/__init__.py"]
        template_dir = "tools/resource"
        templates = ["msg.hpp.em", "../extra/srv.hpp.em"]

        [packages.std_msgs]
        base_dir = "/opt/ros/share/std_msgs"
        idl_files = ["msg/String.idl"]
    "#;

    #[test]
    fn test_defaults() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();

        assert_eq!(manifest.package.target_name(), "my_msgs");
        assert_eq!(manifest.build.build_dir, PathBuf::from("build"));
        assert_eq!(manifest.build.install_root, PathBuf::from("install"));
        assert!(!manifest.build.skip_install);
        assert!(manifest.generator.interpreter.is_none());
        assert!(manifest.has_package("std_msgs"));
    }

    #[test]
    fn test_paths_resolve_against_root() {
        let manifest = Manifest::from_str(MANIFEST).unwrap().with_root("/ws/my_msgs");

        assert_eq!(manifest.package_dir(), PathBuf::from("/ws/my_msgs"));
        assert_eq!(
            manifest.generator_executable(),
            PathBuf::from("/ws/my_msgs/tools/generator")
        );
        assert_eq!(
            manifest.template_files(),
            vec![
                PathBuf::from("/ws/my_msgs/tools/resource/msg.hpp.em"),
                PathBuf::from("/ws/my_msgs/tools/extra/srv.hpp.em"),
            ]
        );
        assert_eq!(manifest.build_dir(), PathBuf::from("/ws/my_msgs/build"));
    }

    #[test]
    fn test_idl_tuples() {
        let manifest = Manifest::from_str(MANIFEST).unwrap().with_root("/ws/my_msgs");
        let tuples: Vec<String> = manifest.idl_tuples().iter().map(|t| t.to_string()).collect();

        assert_eq!(
            tuples,
            vec!["/ws/my_msgs:msg/Foo.idl", "/ws/my_msgs:srv/Bar.idl"]
        );
    }

    #[test]
    fn test_explicit_target() {
        let manifest = Manifest::from_str(
            r#"
            [package]
            name = "my_msgs"
            target = "my_msgs_interfaces"

            [generator]
            language = "cs"
            executable = "gen"
            template_dir = "resource"
            "#,
        )
        .unwrap();

        assert_eq!(manifest.package.target_name(), "my_msgs_interfaces");
        assert_eq!(manifest.generator.language, Language::CSharp);
    }
}
