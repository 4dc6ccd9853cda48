//! Validation context and utilities for manifest parsing.

use std::{
    collections::{BTreeMap, HashSet},
    path::Path,
    sync::Arc,
};

use idlbridge_core::is_valid_package_name;
use miette::SourceSpan;

use super::Manifest;
use crate::{Result, error::SourceContext};

/// File extensions accepted as interface definitions.
const INTERFACE_EXTENSIONS: &[&str] = &["idl", "msg", "srv", "action"];

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested tables.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "idlbridge.toml");
/// ctx.validate_package_name("my_msgs", "package")?;
///
/// // For nested validation
/// let nested = ctx.push("packages").push("std_msgs");
/// nested.validate_package_name("builtin_interfaces", "dependency")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["packages", "std_msgs"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "dependency in 'packages.std_msgs'" or just "package" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a valid package name.
    pub fn validate_package_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_valid_package_name(name) {
            return Ok(());
        }
        Err(self.source.invalid_package_name_error(
            name,
            self.context_for(kind),
            self.find_span(name),
        ))
    }

    /// Validate a list of interface files.
    pub fn validate_idl_files(&self, files: &[impl AsRef<Path>]) -> Result<()> {
        let mut seen = HashSet::new();

        for file in files {
            let file = file.as_ref();
            let display = file.display().to_string();

            let extension = file.extension().and_then(|e| e.to_str()).unwrap_or("");
            if !INTERFACE_EXTENSIONS.contains(&extension) {
                return Err(self.source.validation_error(
                    format!(
                        "'{}' in '{}' is not an interface file (expected one of: {})",
                        display,
                        self.path_string(),
                        INTERFACE_EXTENSIONS.join(", ")
                    ),
                    self.find_span(&display),
                ));
            }

            if !seen.insert(file) {
                return Err(self.source.validation_error(
                    format!(
                        "interface file '{}' is listed twice in '{}'",
                        display,
                        self.path_string()
                    ),
                    self.find_span(&display),
                ));
            }
        }

        Ok(())
    }

    /// Validate a whole manifest.
    pub fn validate_manifest(&self, manifest: &Manifest) -> Result<()> {
        let package = &manifest.package;
        let pkg_ctx = self.push("package");

        pkg_ctx.validate_package_name(&package.name, "package")?;
        pkg_ctx.validate_idl_files(&package.idl_files)?;

        for dep in &package.dependencies {
            pkg_ctx.validate_package_name(dep, "dependency")?;
            if dep == &package.name {
                return Err(self.source.dependency_cycle_error(
                    &[package.name.clone(), dep.clone()],
                    self.find_span(dep),
                ));
            }
            if !manifest.has_package(dep) {
                return Err(self.source.unknown_dependency_error(
                    dep.as_str(),
                    package.name.as_str(),
                    self.find_span(dep),
                ));
            }
        }

        let packages_ctx = self.push("packages");
        for (name, dep_pkg) in &manifest.packages {
            let dep_ctx = packages_ctx.push(name);
            packages_ctx.validate_package_name(name, "package")?;
            dep_ctx.validate_idl_files(&dep_pkg.idl_files)?;
            for nested in &dep_pkg.dependencies {
                dep_ctx.validate_package_name(nested, "dependency")?;
            }
        }

        self.validate_acyclic(manifest)
    }

    /// Reject dependency cycles among the packages known to the manifest.
    ///
    /// Dependencies on packages missing from the index are not followed.
    fn validate_acyclic(&self, manifest: &Manifest) -> Result<()> {
        let mut graph: BTreeMap<&str, Vec<&str>> = manifest
            .packages
            .iter()
            .map(|(name, pkg)| {
                (
                    name.as_str(),
                    pkg.dependencies.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        graph.insert(
            manifest.package.name.as_str(),
            manifest
                .package
                .dependencies
                .iter()
                .map(String::as_str)
                .collect(),
        );

        let mut finished = HashSet::new();
        for start in graph.keys() {
            let mut stack = Vec::new();
            if let Some(cycle) = find_cycle(&graph, start, &mut stack, &mut finished) {
                let span = self.find_span(&cycle[0]);
                return Err(self.source.dependency_cycle_error(&cycle, span));
            }
        }
        Ok(())
    }
}

/// Depth-first search returning the first cycle reachable from `node`.
fn find_cycle<'g>(
    graph: &BTreeMap<&'g str, Vec<&'g str>>,
    node: &'g str,
    stack: &mut Vec<&'g str>,
    finished: &mut HashSet<&'g str>,
) -> Option<Vec<String>> {
    if finished.contains(node) {
        return None;
    }
    if let Some(pos) = stack.iter().position(|n| *n == node) {
        let mut cycle: Vec<String> = stack[pos..].iter().map(|n| n.to_string()).collect();
        cycle.push(node.to_string());
        return Some(cycle);
    }

    stack.push(node);
    for next in graph.get(node).into_iter().flatten() {
        if !graph.contains_key(next) {
            continue;
        }
        if let Some(cycle) = find_cycle(graph, next, stack, finished) {
            return Some(cycle);
        }
    }
    stack.pop();
    finished.insert(node);
    None
}

/// Find the span of a name in the TOML source.
///
/// Searches for a table header like `[packages.name]` first, then for the
/// name as a quoted string value (e.g., in `dependencies = ["name"]`).
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    if name.is_empty() {
        return None;
    }

    // Table headers: [packages.name] or [packages.name.something]
    for pattern in [format!(".{}]", name), format!(".{}.", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // Quoted values: "name" or 'name'
    for pattern in [format!("\"{}\"", name), format!("'{}'", name)] {
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}
