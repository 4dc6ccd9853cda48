mod check;
mod completions;
mod generate;
mod outputs;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use outputs::OutputsCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for idlbridge_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "idlbridge")]
#[command(version)]
#[command(about = "Drive an IDL code generator and export its output as an interface library")]
pub(crate) struct Cli {
    /// Log debug output (overrides IDLBRIDGE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Outputs(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run the generator and install the interface library
    Generate(GenerateCommand),

    /// Validate idlbridge.toml and check that every input exists
    Check(CheckCommand),

    /// List the files the generator is expected to produce
    Outputs(OutputsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
