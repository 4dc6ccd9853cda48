//! Generate operation - run the whole pipeline for one package.

use eyre::{Context, Result};
use idlbridge_codegen::{
    invoke::Staleness,
    pipeline::{GenerateOptions, Pipeline},
    targets::{Registration, aggregate_target_name},
};
use idlbridge_core::WriteResult;
use idlbridge_manifest::Manifest;

use crate::reports::{GenerateReport, GeneratorRun, InstallSummary, PlanPreview};

/// Execute the generate operation.
pub fn generate(manifest: &Manifest, options: GenerateOptions) -> Result<GenerateReport> {
    let ctx = Pipeline::new()
        .run(manifest.clone(), options)
        .wrap_err("Generation failed")?;

    let warnings = ctx.warnings().map(|d| d.message.clone()).collect();

    let generator = match (&ctx.run, &ctx.staleness) {
        (Some(outcome), _) => GeneratorRun::Ran {
            stderr: outcome.stderr.trim_end().to_string(),
        },
        (None, Some(Staleness::UpToDate)) if !options.dry_run => GeneratorRun::UpToDate,
        _ => GeneratorRun::NotRun,
    };

    let preview = options.dry_run.then(|| PlanPreview {
        command: ctx
            .action
            .as_ref()
            .map(|action| action.command_line())
            .unwrap_or_default(),
        outputs: ctx.outputs.clone(),
        inputs: ctx.inputs.paths(),
    });

    let install = ctx.install.as_ref().map(|report| InstallSummary {
        install_root: ctx.manifest.install_root(),
        copied: report.copied.len(),
        skipped: report.skipped(),
    });

    Ok(GenerateReport {
        package: ctx.package_name().to_string(),
        language: ctx.language().to_string(),
        target: aggregate_target_name(ctx.manifest.package.target_name(), ctx.language()),
        newly_registered: ctx.registration == Some(Registration::Created),
        library: ctx.library.as_ref().map(|lib| lib.name.clone()),
        arguments_file: ctx.arguments_file(),
        arguments_changed: ctx.arguments_written == Some(WriteResult::Written),
        outputs: ctx.outputs.len(),
        generator,
        install,
        preview,
        warnings,
    })
}
