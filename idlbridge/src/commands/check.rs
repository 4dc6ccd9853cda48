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
pub struct CheckCommand {
    /// Path to idlbridge.toml (defaults to ./idlbridge.toml)
    #[arg(short, long, default_value = "idlbridge.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let toml = IdlbridgeToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(toml.manifest(), toml.path());

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
