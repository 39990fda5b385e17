use crate::simulator::Scheduler;
use crate::types::ProcessState;

/// Shortest-job-first, non-preemptive: at each dispatch decision the ready
/// job with the smallest burst wins, ties broken by `(arrival, id)`. A
/// dispatched job runs to completion even if shorter jobs arrive mid-run.
#[derive(Debug, Default)]
pub struct Sjf {
    ready: Vec<usize>,
}

impl Sjf {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Scheduler for Sjf {
    fn admit(&mut self, idx: usize, _procs: &[ProcessState]) {
        self.ready.push(idx);
    }

    fn pick(&mut self, procs: &[ProcessState]) -> Option<usize> {
        let pos = self
            .ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &i)| {
                let job = &procs[i].job;
                (job.burst, job.arrival, &job.id)
            })
            .map(|(pos, _)| pos)?;
        Some(self.ready.remove(pos))
    }

    fn requeue(&mut self, idx: usize, _procs: &[ProcessState]) {
        self.ready.push(idx);
    }
}
