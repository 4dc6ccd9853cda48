use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use idlbridge_codegen::pipeline::GenerateOptions;
use idlbridge_manifest::IdlbridgeToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to idlbridge.toml (defaults to ./idlbridge.toml)
    #[arg(short, long, default_value = "idlbridge.toml")]
    pub config: PathBuf,

    /// Show what would be generated without writing or running anything
    #[arg(long)]
    pub dry_run: bool,

    /// Run the generator even if its outputs are up to date
    #[arg(short, long)]
    pub force: bool,

    /// Do not install or export the interface library
    #[arg(long)]
    pub skip_install: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let toml = IdlbridgeToml::open(&self.config).unwrap_or_exit();
        tracing::debug!(config = %toml.path().display(), "loaded configuration");
        let options = GenerateOptions {
            dry_run: self.dry_run,
            force: self.force,
            skip_install: self.skip_install,
        };

        let report = ops::generate(toml.manifest(), options)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
