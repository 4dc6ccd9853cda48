// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `idlbridge.toml`.
//!
//! The configuration describes the package whose interfaces are generated,
//! the external generator, build/install locations, and an index of the
//! dependency packages (their base directories, interface files and
//! dependencies) as already resolved by the host build system.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    BuildConfig, DependencyPackage, GeneratorConfig, IdlbridgeToml, Language, Manifest,
    PackageConfig, ParseContext, parse_manifest,
};
