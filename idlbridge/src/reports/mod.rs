//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod outputs;

pub use check::{CheckReport, PackageSummary};
pub use generate::{GenerateReport, GeneratorRun, InstallSummary, PlanPreview};
pub use output::{Report, TerminalOutput};
pub use outputs::OutputsReport;
