//! Phases that work out what a run involves without touching the build tree.

use idlbridge_core::IdlFile;

use crate::{
    Result,
    dependencies::collect,
    job::{JobSpec, build_job},
    paths::resolve_package_outputs,
    pipeline::{GenerationContext, Phase},
};

/// Resolves the package's own interface files and their output paths.
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve interface files and declared outputs"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        ctx.idl_files = ctx
            .manifest
            .idl_tuples()
            .iter()
            .map(|tuple| IdlFile::new(tuple.absolute()))
            .collect::<std::result::Result<_, _>>()?;

        if ctx.idl_files.is_empty() {
            let message = format!("package '{}' has no interface files", ctx.package_name());
            ctx.add_warning(self.name(), message);
        }

        let output_dir = ctx.output_dir();
        ctx.outputs = resolve_package_outputs(&ctx.idl_files, &output_dir, &ctx.layout)?;
        Ok(())
    }
}

/// Collects the interface files of the direct dependencies.
pub struct CollectPhase;

impl Phase for CollectPhase {
    fn name(&self) -> &'static str {
        "collect"
    }

    fn description(&self) -> &'static str {
        "Collect dependency interface files"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        ctx.dependencies = collect(&ctx.manifest, &ctx.manifest.package.dependencies)?;
        Ok(())
    }
}

/// Builds the tracked input list and checks every input exists.
pub struct DescribePhase;

impl Phase for DescribePhase {
    fn name(&self) -> &'static str {
        "describe"
    }

    fn description(&self) -> &'static str {
        "Verify generator, templates and interface files"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let spec = JobSpec {
            generator: ctx.manifest.generator_executable(),
            support_files: ctx.manifest.generator_support_files(),
            templates: ctx.manifest.template_files(),
            idl_files: ctx
                .idl_files
                .iter()
                .map(|file| file.path().to_path_buf())
                .collect(),
            dependency_files: ctx.dependencies.files.clone(),
        };
        ctx.inputs = build_job(&spec)?;
        Ok(())
    }
}
