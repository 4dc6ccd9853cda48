//! Pipeline orchestrator.

use idlbridge_manifest::Manifest;

use super::{
    GenerateOptions, GenerationContext, Phase,
    phases::{
        ArgumentsPhase, CollectPhase, ComposePhase, DescribePhase, ExportPhase, InvokePhase,
        ResolvePhase,
    },
};
use crate::Result;

/// The generation pipeline orchestrator.
///
/// # Example
///
/// ```ignore
/// // Everything, from output resolution to library export
/// let ctx = Pipeline::new().run(manifest, options)?;
///
/// // Only resolve outputs and verify inputs
/// let ctx = Pipeline::plan().run(manifest, options)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline running every built-in phase.
    pub fn new() -> Self {
        Self {
            phases: vec![
                Box::new(ResolvePhase),
                Box::new(CollectPhase),
                Box::new(DescribePhase),
                Box::new(ArgumentsPhase),
                Box::new(InvokePhase),
                Box::new(ComposePhase),
                Box::new(ExportPhase),
            ],
        }
    }

    /// Create a pipeline that stops after the inputs are verified.
    ///
    /// Nothing is written to the build or install tree.
    pub fn plan() -> Self {
        Self {
            phases: vec![
                Box::new(ResolvePhase),
                Box::new(CollectPhase),
                Box::new(DescribePhase),
            ],
        }
    }

    /// Create a pipeline with no phases.
    pub fn empty() -> Self {
        Self { phases: Vec::new() }
    }

    /// Add a phase to run after the existing ones.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Names and descriptions of the phases, in execution order.
    pub fn phases(&self) -> impl Iterator<Item = super::PhaseInfo> + '_ {
        self.phases.iter().map(|phase| phase.info())
    }

    /// Run the pipeline for a manifest.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error; later phases do not run.
    pub fn run(&self, manifest: Manifest, options: GenerateOptions) -> Result<GenerationContext> {
        let mut ctx = GenerationContext::new(manifest, options);
        self.run_with(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    pub fn run_with(&self, ctx: &mut GenerationContext) -> Result<()> {
        let package = ctx.package_name().to_string();
        let _span = tracing::info_span!("generate", package = %package, language = %ctx.language())
            .entered();

        for phase in &self.phases {
            tracing::debug!(phase = phase.name(), "running phase");
            phase.run(ctx)?;
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order() {
        let names: Vec<&str> = Pipeline::new().phases().map(|info| info.name).collect();
        assert_eq!(
            names,
            vec![
                "resolve",
                "collect",
                "describe",
                "arguments",
                "invoke",
                "compose",
                "export"
            ]
        );
    }

    #[test]
    fn test_plan_stops_after_describe() {
        let names: Vec<&str> = Pipeline::plan().phases().map(|info| info.name).collect();
        assert_eq!(names, vec!["resolve", "collect", "describe"]);
    }

    #[test]
    fn test_custom_phases() {
        let pipeline = Pipeline::empty().phase(ResolvePhase).phase(CollectPhase);
        let names: Vec<&str> = pipeline.phases().map(|info| info.name).collect();
        assert_eq!(names, vec!["resolve", "collect"]);
    }

    #[test]
    fn test_plan_rejects_missing_generator() {
        let manifest: Manifest = r#"
            [package]
            name = "my_msgs"

            [generator]
            language = "cpp"
            executable = "bin/absent_generator"
            template_dir = "resource"
        "#
        .parse::<Manifest>()
        .unwrap()
        .with_root("/nonexistent/my_msgs");

        let err = Pipeline::plan()
            .run(manifest, GenerateOptions::default())
            .unwrap_err();

        assert!(matches!(
            err,
            crate::Error::MissingInput {
                role: crate::InputRole::Generator,
                ..
            }
        ));
    }
}
