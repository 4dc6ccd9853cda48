//! Phases that write the arguments file and run the generator.

use crate::{
    Result,
    arguments::{GeneratorArguments, write_arguments},
    invoke::{GenerationAction, Staleness, run, staleness},
    pipeline::{GenerationContext, Phase},
};

/// Writes the generator arguments file.
pub struct ArgumentsPhase;

impl Phase for ArgumentsPhase {
    fn name(&self) -> &'static str {
        "arguments"
    }

    fn description(&self) -> &'static str {
        "Write the generator arguments file"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let arguments = GeneratorArguments {
            package_name: ctx.package_name().to_string(),
            idl_tuples: ctx.manifest.idl_tuples(),
            ros_interface_dependencies: ctx.dependencies.edges.clone(),
            output_dir: ctx.output_dir(),
            template_dir: ctx.manifest.template_dir(),
            target_dependencies: ctx.inputs.paths(),
        };

        if !ctx.options.dry_run {
            ctx.arguments_written = Some(write_arguments(&ctx.arguments_file(), &arguments)?);
        }
        ctx.arguments = Some(arguments);
        Ok(())
    }
}

/// Runs the generator when its outputs are missing or out of date.
pub struct InvokePhase;

impl Phase for InvokePhase {
    fn name(&self) -> &'static str {
        "invoke"
    }

    fn description(&self) -> &'static str {
        "Run the generator"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let action = GenerationAction::new(
            ctx.language(),
            &ctx.manifest.generator_executable(),
            ctx.manifest.generator.interpreter.as_deref(),
            &ctx.arguments_file(),
            ctx.inputs.paths(),
            ctx.outputs.clone(),
            ctx.manifest.build_dir(),
        );
        let state = staleness(&action);

        if ctx.options.dry_run {
            tracing::debug!(?state, "dry run, generator not started");
        } else if ctx.options.force || state.is_stale() {
            if let Staleness::MissingOutput(path) | Staleness::InputNewer(path) = &state {
                tracing::debug!(path = %path.display(), "generator outputs are stale");
            }
            ctx.run = Some(run(&action)?);
        } else {
            ctx.add_info(self.name(), "generated sources are up to date");
        }

        ctx.staleness = Some(state);
        ctx.action = Some(action);
        Ok(())
    }
}
