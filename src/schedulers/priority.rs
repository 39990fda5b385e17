use std::cmp::min;

use crate::simulator::Scheduler;
use crate::types::{Duration, ProcessState, Time};

/// Priority scheduling, lower value wins, ties broken by `(arrival, id)`.
///
/// Non-preemptive mode dispatches like SJF with the priority comparator.
/// Preemptive mode is event-driven: a slice lasts at most until the next
/// arrival, the unfinished job returns to the pool with its remaining time,
/// and the dispatch decision is re-evaluated. A newcomer with a strictly
/// lower priority value therefore takes over at its arrival instant, while
/// a re-picked incumbent extends its current Gantt segment seamlessly.
#[derive(Debug)]
pub struct Priority {
    preemptive: bool,
    ready: Vec<usize>,
}

impl Priority {
    pub fn new(preemptive: bool) -> Self {
        Priority {
            preemptive,
            ready: vec![],
        }
    }
}

impl Scheduler for Priority {
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
                (job.priority, job.arrival, &job.id)
            })
            .map(|(pos, _)| pos)?;
        Some(self.ready.remove(pos))
    }

    fn slice(&self, proc: &ProcessState, now: Time, next_arrival: Option<Time>) -> Duration {
        if !self.preemptive {
            return proc.remaining;
        }
        match next_arrival {
            // the driver admits everything due before dispatching, so the
            // next arrival is strictly in the future
            Some(at) => min(proc.remaining, at - now),
            None => proc.remaining,
        }
    }

    fn requeue(&mut self, idx: usize, _procs: &[ProcessState]) {
        self.ready.push(idx);
    }
}
