//! Built-in pipeline phases, in execution order:
//!
//! - [`ResolvePhase`] - resolves the package's interface files and outputs
//! - [`CollectPhase`] - collects dependency interface files
//! - [`DescribePhase`] - builds and verifies the tracked input list
//! - [`ArgumentsPhase`] - writes the generator arguments file
//! - [`InvokePhase`] - runs the generator when its outputs are stale
//! - [`ComposePhase`] - registers the aggregate generation target
//! - [`ExportPhase`] - declares, installs and exports the interface library

mod generate;
mod plan;
mod publish;

pub use generate::{ArgumentsPhase, InvokePhase};
pub use plan::{CollectPhase, DescribePhase, ResolvePhase};
pub use publish::{ComposePhase, ExportPhase};
