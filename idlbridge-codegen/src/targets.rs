//! Build target composition.
//!
//! The generation step is wrapped in an aggregate target named
//! `{umbrella}__{language}` (e.g., "my_msgs__cpp") that the package's
//! umbrella target depends on. The interface library lives in the same
//! target namespace under `{umbrella}__{generator_name}`. Registering the same
//! aggregate twice is tolerated with a warning.

use std::path::PathBuf;

use idlbridge_manifest::Language;
use indexmap::{IndexMap, IndexSet};

use crate::pipeline::Diagnostic;

/// Phase name attached to composition diagnostics.
pub const PHASE: &str = "compose";

/// Target graph of the host build system.
pub trait TargetRegistry {
    /// Check if a target with this name exists.
    fn exists(&self, name: &str) -> bool;

    /// Create a target that depends on the given files.
    fn create(&mut self, name: &str, files: &[PathBuf]);

    /// Make `target` depend on `dependency`.
    fn add_dependency(&mut self, target: &str, dependency: &str);

    /// Registration state of a target.
    fn state(&self, name: &str) -> TargetState {
        if self.exists(name) {
            TargetState::Registered
        } else {
            TargetState::Unregistered
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    Unregistered,
    Registered,
}

/// Outcome of registering an aggregate target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Created,
    AlreadyRegistered,
}

/// A target known to an [`InMemoryRegistry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub files: Vec<PathBuf>,
    pub depends_on: IndexSet<String>,
}

/// A target registry kept in memory, in registration order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    targets: IndexMap<String, Target>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Target> {
        self.targets.get(name)
    }

    /// Iterate over targets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Target)> {
        self.targets.iter().map(|(name, target)| (name.as_str(), target))
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl TargetRegistry for InMemoryRegistry {
    fn exists(&self, name: &str) -> bool {
        self.targets.contains_key(name)
    }

    fn create(&mut self, name: &str, files: &[PathBuf]) {
        self.targets.insert(
            name.to_string(),
            Target {
                files: files.to_vec(),
                depends_on: IndexSet::new(),
            },
        );
    }

    fn add_dependency(&mut self, target: &str, dependency: &str) {
        self.targets
            .entry(target.to_string())
            .or_default()
            .depends_on
            .insert(dependency.to_string());
    }
}

/// Name of the aggregate generation target (e.g., "my_msgs__cpp").
pub fn aggregate_target_name(umbrella: &str, language: Language) -> String {
    format!("{}__{}", umbrella, language.as_str())
}

/// Register the aggregate target and hook it into the umbrella target.
///
/// An aggregate that already exists is not recreated; a warning diagnostic
/// is recorded instead. The umbrella target is created on demand and
/// depends on the aggregate either way.
pub fn compose(
    registry: &mut impl TargetRegistry,
    target_name: &str,
    outputs: &[PathBuf],
    umbrella: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Registration {
    let registration = match registry.state(target_name) {
        TargetState::Registered => {
            let message = format!("custom target '{target_name}' already exists");
            tracing::warn!(target_name, "{message}");
            diagnostics.push(Diagnostic::warning(PHASE, message).at(target_name));
            Registration::AlreadyRegistered
        }
        TargetState::Unregistered => {
            registry.create(target_name, outputs);
            tracing::debug!(target_name, outputs = outputs.len(), "registered generation target");
            Registration::Created
        }
    };

    if !registry.exists(umbrella) {
        registry.create(umbrella, &[]);
    }
    registry.add_dependency(umbrella, target_name);

    registration
}
