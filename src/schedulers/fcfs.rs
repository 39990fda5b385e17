use crate::simulator::Scheduler;
use crate::types::ProcessState;

/// First-come-first-served: jobs run to completion in `(arrival, id)`
/// order.
#[derive(Debug, Default)]
pub struct Fcfs {
    ready: Vec<usize>,
}

impl Fcfs {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Scheduler for Fcfs {
    fn admit(&mut self, idx: usize, _procs: &[ProcessState]) {
        self.ready.push(idx);
    }

    fn pick(&mut self, procs: &[ProcessState]) -> Option<usize> {
        let pos = self
            .ready
            .iter()
            .enumerate()
            .min_by_key(|&(_, &i)| (procs[i].job.arrival, &procs[i].job.id))
            .map(|(pos, _)| pos)?;
        Some(self.ready.remove(pos))
    }

    fn requeue(&mut self, idx: usize, _procs: &[ProcessState]) {
        self.ready.push(idx);
    }
}
