//! Generation pipeline.
//!
//! A [`Pipeline`] runs the phases of one package/language generation in
//! order: resolve outputs, collect dependencies, verify inputs, write the
//! arguments file, run the generator, register targets, export the library.
//! Results and non-fatal diagnostics accumulate in a [`GenerationContext`].
//!
//! # Example
//!
//! ```ignore
//! use idlbridge_codegen::pipeline::{GenerateOptions, Pipeline};
//!
//! let ctx = Pipeline::new().run(manifest, GenerateOptions::default())?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod runner;

pub use context::{GenerateOptions, GenerationContext};
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use runner::Pipeline;
