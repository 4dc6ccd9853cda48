//! Dependency interface collection.
//!
//! The interface files of a package's direct dependencies are tracked as
//! inputs of the generation step and handed to the generator as
//! `package:path` edges. Collection is shallow: the dependencies of a
//! dependency are not expanded.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use idlbridge_core::{DependencyEdge, normalize_path};
use idlbridge_manifest::Manifest;
use indexmap::IndexSet;

use crate::{Error, Result};

/// Package metadata provided by the host build system.
pub trait PackageIndex {
    /// Interface files of a package, relative to its base directory.
    ///
    /// Returns `None` when the package is unknown.
    fn idl_files(&self, package: &str) -> Option<Vec<PathBuf>>;

    /// Base directory of a package.
    fn base_dir(&self, package: &str) -> Option<PathBuf>;

    /// Packages a package itself depends on.
    fn dependencies(&self, package: &str) -> Vec<String>;
}

impl PackageIndex for Manifest {
    fn idl_files(&self, package: &str) -> Option<Vec<PathBuf>> {
        self.packages.get(package).map(|pkg| pkg.idl_files.clone())
    }

    fn base_dir(&self, package: &str) -> Option<PathBuf> {
        self.packages
            .get(package)
            .map(|pkg| self.resolve(&pkg.base_dir))
    }

    fn dependencies(&self, package: &str) -> Vec<String> {
        self.packages
            .get(package)
            .map(|pkg| pkg.dependencies.clone())
            .unwrap_or_default()
    }
}

/// An in-memory package index.
#[derive(Debug, Clone, Default)]
pub struct StaticIndex {
    packages: BTreeMap<String, StaticPackage>,
}

#[derive(Debug, Clone)]
struct StaticPackage {
    base_dir: PathBuf,
    idl_files: Vec<PathBuf>,
    dependencies: Vec<String>,
}

impl StaticIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package to the index.
    pub fn package<I, D>(
        mut self,
        name: impl Into<String>,
        base_dir: impl Into<PathBuf>,
        idl_files: I,
        dependencies: D,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.packages.insert(
            name.into(),
            StaticPackage {
                base_dir: base_dir.into(),
                idl_files: idl_files.into_iter().map(Into::into).collect(),
                dependencies: dependencies.into_iter().map(Into::into).collect(),
            },
        );
        self
    }
}

impl PackageIndex for StaticIndex {
    fn idl_files(&self, package: &str) -> Option<Vec<PathBuf>> {
        self.packages.get(package).map(|pkg| pkg.idl_files.clone())
    }

    fn base_dir(&self, package: &str) -> Option<PathBuf> {
        self.packages.get(package).map(|pkg| pkg.base_dir.clone())
    }

    fn dependencies(&self, package: &str) -> Vec<String> {
        self.packages
            .get(package)
            .map(|pkg| pkg.dependencies.clone())
            .unwrap_or_default()
    }
}

/// Interface files contributed by the direct dependencies of a package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectedDependencies {
    /// Absolute paths, deduplicated, in first-seen order.
    pub files: Vec<PathBuf>,
    /// One edge per `(package, path)` pair.
    pub edges: Vec<DependencyEdge>,
}

impl CollectedDependencies {
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Collect the interface files of the given dependency packages.
pub fn collect<S: AsRef<str>>(
    index: &impl PackageIndex,
    dependency_packages: &[S],
) -> Result<CollectedDependencies> {
    let mut files = IndexSet::new();
    let mut edges = Vec::new();

    for package in dependency_packages {
        let package = package.as_ref();
        let unknown = || Error::UnknownPackage {
            name: package.to_string(),
        };
        let base_dir = index.base_dir(package).ok_or_else(unknown)?;
        let idl_files = index.idl_files(package).ok_or_else(unknown)?;

        if idl_files.is_empty() {
            tracing::debug!(package, "dependency has no interface files");
        }

        for relative in &idl_files {
            let path = absolute_idl_path(&base_dir, relative);
            edges.push(DependencyEdge::new(package, path.clone()));
            files.insert(path);
        }

        let nested = index.dependencies(package);
        if !nested.is_empty() {
            tracing::debug!(package, ?nested, "not expanding nested dependencies");
        }
    }

    tracing::debug!(
        packages = dependency_packages.len(),
        files = files.len(),
        edges = edges.len(),
        "collected dependency interfaces"
    );

    Ok(CollectedDependencies {
        files: files.into_iter().collect(),
        edges,
    })
}

fn absolute_idl_path(base_dir: &Path, relative: &Path) -> PathBuf {
    normalize_path(&base_dir.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> StaticIndex {
        StaticIndex::new()
            .package(
                "b_msgs",
                "/ws/b_msgs",
                ["msg/B.idl", "./msg/../msg/B2.idl"],
                ["c_msgs"],
            )
            .package("c_msgs", "/ws/c_msgs", ["msg/C.idl"], Vec::<String>::new())
            .package("empty_msgs", "/ws/empty_msgs", Vec::<PathBuf>::new(), Vec::<String>::new())
    }

    #[test]
    fn test_collect_is_shallow() {
        let collected = collect(&chain(), &["b_msgs"]).unwrap();

        assert_eq!(
            collected.files,
            vec![
                PathBuf::from("/ws/b_msgs/msg/B.idl"),
                PathBuf::from("/ws/b_msgs/msg/B2.idl"),
            ]
        );
        assert!(collected.edges.iter().all(|edge| edge.package == "b_msgs"));
    }

    #[test]
    fn test_edges_use_normalized_paths() {
        let collected = collect(&chain(), &["b_msgs"]).unwrap();
        let edges: Vec<String> = collected.edges.iter().map(|e| e.to_string()).collect();

        assert_eq!(
            edges,
            vec!["b_msgs:/ws/b_msgs/msg/B.idl", "b_msgs:/ws/b_msgs/msg/B2.idl"]
        );
    }

    #[test]
    fn test_package_without_interfaces() {
        let collected = collect(&chain(), &["empty_msgs"]).unwrap();
        assert!(collected.is_empty());
        assert!(collected.files.is_empty());
    }

    #[test]
    fn test_unknown_package() {
        let err = collect(&chain(), &["missing_msgs"]).unwrap_err();
        assert!(matches!(err, Error::UnknownPackage { ref name } if name == "missing_msgs"));
    }

    #[test]
    fn test_files_deduplicated_edges_kept() {
        let index = StaticIndex::new()
            .package("a_msgs", "/ws/shared", ["msg/Common.idl"], Vec::<String>::new())
            .package("b_msgs", "/ws/shared", ["msg/Common.idl"], Vec::<String>::new());

        let collected = collect(&index, &["a_msgs", "b_msgs"]).unwrap();

        assert_eq!(collected.files, vec![PathBuf::from("/ws/shared/msg/Common.idl")]);
        assert_eq!(collected.edges.len(), 2);
        assert_eq!(collected.edges[1].package, "b_msgs");
    }

    #[test]
    fn test_manifest_as_index() {
        let manifest: Manifest = r#"
            [package]
            name = "a_msgs"
            dependencies = ["b_msgs"]

            [generator]
            language = "cpp"
            executable = "gen"
            template_dir = "resource"

            [packages.b_msgs]
            base_dir = "deps/b_msgs"
            idl_files = ["msg/B.idl"]
            dependencies = ["c_msgs"]

            [packages.c_msgs]
            base_dir = "deps/c_msgs"
            idl_files = ["msg/C.idl"]
        "#
        .parse::<Manifest>()
        .unwrap()
        .with_root("/ws/a_msgs");

        let collected = collect(&manifest, &manifest.package.dependencies).unwrap();

        assert_eq!(
            collected.files,
            vec![PathBuf::from("/ws/a_msgs/deps/b_msgs/msg/B.idl")]
        );
        assert_eq!(manifest.dependencies("b_msgs"), vec!["c_msgs".to_string()]);
    }
}
