use structopt::StructOpt;

use cpusched::utils::prelude::*;
use cpusched::SimConfig;

/// Should be implemented by individual subcommand
pub trait Cmd {
    fn run(self) -> Result<()>;
}

/// Run simulation end-to-end
#[derive(StructOpt)]
pub struct Run {
    /// Apply a named preset from the config before running
    #[structopt(short, long)]
    preset: Option<String>,
}

impl Cmd for Run {
    fn run(self) -> Result<()> {
        if let Some(name) = &self.preset {
            config_mut().use_preset(name)?;
        }
        cpusched::run_sim()
    }
}

/// Show the configuration
#[derive(StructOpt)]
pub struct Config {}

impl Cmd for Config {
    fn run(self) -> Result<()> {
        let cfg: SimConfig = config().fetch()?;
        println!("{}", serde_yaml::to_string(&cfg)?);

        Ok(())
    }
}
