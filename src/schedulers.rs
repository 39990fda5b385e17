use parse_display::Display;

use crate::simulator::Scheduler;
use crate::types::Duration;
use crate::utils::logging::prelude::*;
use crate::validate::SimError;

mod fcfs;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use priority::Priority;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

/// Which discipline to run, straight out of the config file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize, Display)]
#[serde(tag = "policy", rename_all = "snake_case")]
#[display("{}")]
pub enum SchedulerConfig {
    Fcfs,
    Sjf,
    Priority {
        #[serde(default)]
        preemptive: bool,
    },
    RoundRobin {
        /// Fixed time slice per dispatch, must be positive
        quantum: i64,
    },
}

pub fn from_config(cfg: &SchedulerConfig) -> Result<Box<dyn Scheduler>, SimError> {
    info!(scheduler = %cfg, "using");
    Ok(match cfg {
        SchedulerConfig::Fcfs => Box::new(Fcfs::new()),
        SchedulerConfig::Sjf => Box::new(Sjf::new()),
        SchedulerConfig::Priority { preemptive } => Box::new(Priority::new(*preemptive)),
        SchedulerConfig::RoundRobin { quantum } => {
            if *quantum <= 0 {
                return Err(SimError::InvalidQuantum(*quantum));
            }
            Box::new(RoundRobin::new(Duration(*quantum as u64)))
        }
    })
}
