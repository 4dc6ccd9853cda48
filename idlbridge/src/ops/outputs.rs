//! Outputs operation - list declared outputs and tracked inputs.

use eyre::{Context, Result};
use idlbridge_codegen::pipeline::{
    GenerateOptions, Pipeline,
    phases::{CollectPhase, DescribePhase, ResolvePhase},
};
use idlbridge_manifest::Manifest;

use crate::reports::OutputsReport;

/// Execute the outputs operation.
///
/// Listing inputs also verifies that they exist.
pub fn outputs(manifest: &Manifest, with_inputs: bool) -> Result<OutputsReport> {
    let mut pipeline = Pipeline::empty().phase(ResolvePhase);
    if with_inputs {
        pipeline = pipeline.phase(CollectPhase).phase(DescribePhase);
    }

    let ctx = pipeline
        .run(manifest.clone(), GenerateOptions::default())
        .wrap_err("Failed to resolve outputs")?;

    Ok(OutputsReport {
        outputs: ctx.outputs.clone(),
        inputs: with_inputs.then(|| ctx.inputs.paths()),
    })
}
