//! Phases that expose the generated sources to the rest of the build.

use crate::{
    Result,
    library::{FileExports, InterfaceLibrary, install},
    pipeline::{GenerationContext, Phase},
    targets::{aggregate_target_name, compose},
};

/// Registers the aggregate generation target under the umbrella target.
pub struct ComposePhase;

impl Phase for ComposePhase {
    fn name(&self) -> &'static str {
        "compose"
    }

    fn description(&self) -> &'static str {
        "Register the aggregate generation target"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let umbrella = ctx.manifest.package.target_name();
        let aggregate = aggregate_target_name(umbrella, ctx.manifest.generator.language);

        let registration = compose(
            &mut ctx.targets,
            &aggregate,
            &ctx.outputs,
            umbrella,
            &mut ctx.diagnostics,
        );
        ctx.registration = Some(registration);
        Ok(())
    }
}

/// Declares the interface library, then installs and exports it.
pub struct ExportPhase;

impl Phase for ExportPhase {
    fn name(&self) -> &'static str {
        "export"
    }

    fn description(&self) -> &'static str {
        "Install and export the interface library"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let library = InterfaceLibrary::new(
            ctx.package_name(),
            ctx.manifest.package.target_name(),
            ctx.language(),
            &ctx.manifest.build_dir(),
            &ctx.manifest.package.dependencies,
        );

        if !ctx.options.dry_run {
            let install_root = ctx.manifest.install_root();
            let mut exports = FileExports::new(&install_root, ctx.package_name());
            let report = install(
                &library,
                &ctx.output_dir(),
                &install_root,
                &ctx.layout,
                &mut exports,
                ctx.skip_install(),
            )?;
            ctx.install = Some(report);
        }

        ctx.library = Some(library);
        Ok(())
    }
}
