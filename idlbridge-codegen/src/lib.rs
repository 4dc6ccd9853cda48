//! Build integration for an external interface code generator.
//!
//! Given a package's interface files and its dependency packages, this crate
//! works out which files the generator must produce, which inputs have to be
//! tracked for regeneration, how the generator is invoked, and how the
//! generated sources are exposed as an interface library.
//!
//! # Module Organization
//!
//! - [`paths`] - Output path resolution (ArtifactLayout, resolve_outputs)
//! - [`dependencies`] - Dependency interface collection (PackageIndex, collect)
//! - [`job`] - Tracked generation inputs (JobSpec, build_job)
//! - [`arguments`] - The generator arguments file (GeneratorArguments)
//! - [`invoke`] - Generator invocation and staleness (GenerationAction, run)
//! - [`targets`] - Aggregate target registration (TargetRegistry, compose)
//! - [`library`] - Interface library install and export (InterfaceLibrary, install)
//! - [`pipeline`] - Runs all of the above for one package (Pipeline)

pub mod arguments;
pub mod dependencies;
mod error;
pub mod invoke;
pub mod job;
pub mod library;
pub mod paths;
pub mod pipeline;
pub mod targets;

pub use error::{Error, InputRole, Result};
