use std::path::PathBuf;

use structopt::StructOpt;

use cpusched::utils::prelude::*;

use crate::commands::{self, Cmd};

#[derive(StructOpt)]
#[structopt(name = "cpusched", about = "CPU scheduling simulator")]
pub struct Cli {
    /// Set a custom config file
    #[structopt(short, long, value_name = "FILE", parse(from_os_str))]
    config: Option<PathBuf>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
pub enum Command {
    /// Run the configured simulation end-to-end
    Run(commands::Run),
    /// Show the effective configuration
    Config(commands::Config),
}

/// Parse arguments and dispatch to the subcommand
pub fn execute() -> Result<()> {
    let cli = Cli::from_args();

    if let Some(path) = &cli.config {
        config_mut().use_file(path)?;
    }

    match cli.cmd {
        Command::Run(cmd) => cmd.run(),
        Command::Config(cmd) => cmd.run(),
    }
}
