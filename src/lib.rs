use crate::utils::prelude::*;

mod config;
pub mod input;
pub mod metrics;
mod output;
pub mod schedulers;
pub mod simulator;
pub mod timeline;
pub mod types;
pub mod utils;
pub mod validate;

pub use schedulers::SchedulerConfig;
pub use simulator::{schedule_loop, simulate, Scheduler};
pub use types::{Duration, GanttSegment, Job, ProcessState, SimOutcome, Time};
pub use validate::SimError;

#[derive(Debug, serde::Deserialize, serde::Serialize)]
pub struct SimConfig {
    pub workload: input::WorkloadConfig,
    pub scheduler: schedulers::SchedulerConfig,
}

/// Run the configured simulation end-to-end: load the workload, drive the
/// scheduler, write the outputs.
pub fn run_sim() -> Result<()> {
    let _g = info_span!("sim").entered();

    let cfg: SimConfig = config().fetch()?;
    let outcome = {
        let _g = info_span!("run").entered();

        // setup input jobs
        let jobs = input::from_config(&cfg.workload)?;

        // run!
        simulator::simulate(jobs, &cfg.scheduler)?
    };

    // outputs
    {
        let _g = info_span!("output").entered();
        output::render_chrome_trace(&outcome)?;
        output::render_metrics_csv(&outcome)?;
    }

    Ok(())
}
