//! Core utilities and types for idlbridge.
//!
//! This crate provides the value types shared by the configuration and
//! generation crates: interface files, dependency edges, the naming
//! transform used for output file names, and file writing primitives.

mod file;
mod interface;
mod naming;
mod path;

// File operations
pub use file::{File, Overwrite, WriteResult, copy_file};
// Interface types
pub use interface::{DependencyEdge, IdlFile, IdlTuple, InterfaceError};
// String utilities
pub use naming::{camel_to_underscore, is_valid_package_name};
// Path utilities
pub use path::normalize_path;
