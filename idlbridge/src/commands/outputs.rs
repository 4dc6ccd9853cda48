use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use idlbridge_manifest::IdlbridgeToml;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct OutputsCommand {
    /// Path to idlbridge.toml (defaults to ./idlbridge.toml)
    #[arg(short, long, default_value = "idlbridge.toml")]
    pub config: PathBuf,

    /// Also list the tracked inputs
    #[arg(long)]
    pub inputs: bool,
}

impl OutputsCommand {
    pub fn run(&self) -> Result<()> {
        let toml = IdlbridgeToml::open(&self.config).unwrap_or_exit();
        let report = ops::outputs(toml.manifest(), self.inputs)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
