//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub package: String,
    pub language: String,
    /// Aggregate generation target.
    pub target: String,
    /// Whether the target was registered by this run.
    pub newly_registered: bool,
    /// Interface library name.
    pub library: Option<String>,
    pub arguments_file: PathBuf,
    /// Whether the arguments file was rewritten.
    pub arguments_changed: bool,
    /// Number of declared outputs.
    pub outputs: usize,
    pub generator: GeneratorRun,
    /// Install result, absent on dry runs.
    pub install: Option<InstallSummary>,
    /// What would run, on dry runs.
    pub preview: Option<PlanPreview>,
    /// Warning messages from the pipeline.
    pub warnings: Vec<String>,
}

/// What happened to the generator.
#[derive(Debug, PartialEq, Eq)]
pub enum GeneratorRun {
    /// The generator ran; its stderr is kept for display.
    Ran { stderr: String },
    UpToDate,
    NotRun,
}

#[derive(Debug)]
pub struct InstallSummary {
    pub install_root: PathBuf,
    pub copied: usize,
    pub skipped: bool,
}

/// Dry-run plan.
#[derive(Debug)]
pub struct PlanPreview {
    pub command: String,
    pub outputs: Vec<PathBuf>,
    pub inputs: Vec<PathBuf>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if let Some(preview) = &self.preview {
            render_preview(preview, out);
            return;
        }

        out.key_value("package", &format!("{} ({})", self.package, self.language));

        let arguments = if self.arguments_changed {
            "written"
        } else {
            "unchanged"
        };
        out.key_value(
            "arguments",
            &format!("{} ({})", self.arguments_file.display(), arguments),
        );

        match &self.generator {
            GeneratorRun::Ran { stderr } => {
                out.key_value("generator", &format!("produced {} files", self.outputs));
                if !stderr.is_empty() {
                    out.preformatted(stderr);
                }
            }
            GeneratorRun::UpToDate => out.key_value("generator", "up to date"),
            GeneratorRun::NotRun => out.key_value("generator", "not run"),
        }

        if self.newly_registered {
            out.section("targets");
            out.added_item(&self.target);
        }

        if let Some(install) = &self.install {
            if install.skipped {
                out.key_value("install", "skipped");
            } else {
                out.key_value(
                    "install",
                    &format!(
                        "{} files to {}",
                        install.copied,
                        install.install_root.display()
                    ),
                );
                if let Some(library) = &self.library {
                    out.key_value("exported", library);
                }
            }
        }
    }
}

fn render_preview(preview: &PlanPreview, out: &mut dyn Output) {
    out.divider("command");
    out.preformatted(&preview.command);
    out.newline();

    out.divider("outputs");
    for path in &preview.outputs {
        out.preformatted(&path.display().to_string());
    }
    out.newline();

    out.divider("inputs");
    for path in &preview.inputs {
        out.preformatted(&path.display().to_string());
    }
    out.newline();

    out.divider("Summary");
    out.preformatted(&format!(
        "{} files would be generated from {} inputs",
        preview.outputs.len(),
        preview.inputs.len()
    ));
}
