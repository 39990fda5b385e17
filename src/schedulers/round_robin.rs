use std::cmp::min;
use std::collections::VecDeque;

use crate::simulator::Scheduler;
use crate::types::{Duration, ProcessState, Time};

/// Round robin over a strict FIFO queue with a fixed quantum.
///
/// The fairness contract lives in the driver's call order: jobs arriving
/// during a slice are admitted (appended to the tail) before the
/// just-preempted job is requeued, so a preempted job always lines up
/// behind concurrent arrivals.
#[derive(Debug)]
pub struct RoundRobin {
    quantum: Duration,
    queue: VecDeque<usize>,
}

impl RoundRobin {
    pub fn new(quantum: Duration) -> Self {
        RoundRobin {
            quantum,
            queue: VecDeque::new(),
        }
    }
}

impl Scheduler for RoundRobin {
    fn admit(&mut self, idx: usize, _procs: &[ProcessState]) {
        self.queue.push_back(idx);
    }

    fn pick(&mut self, _procs: &[ProcessState]) -> Option<usize> {
        self.queue.pop_front()
    }

    fn slice(&self, proc: &ProcessState, _now: Time, _next_arrival: Option<Time>) -> Duration {
        min(proc.remaining, self.quantum)
    }

    fn requeue(&mut self, idx: usize, _procs: &[ProcessState]) {
        self.queue.push_back(idx);
    }
}
