use crate::schedulers::{self, SchedulerConfig};
use crate::timeline::TimelineBuilder;
use crate::types::{Duration, Job, ProcessState, SimOutcome, Time};
use crate::utils::logging::prelude::*;
use crate::validate::{self, SimError};

/// A scheduling discipline, driven by the clock-stepped loop below.
///
/// Implementations own their ready structure (a comparator scan for the
/// non-preemptive policies, a strict FIFO for round robin) and are handed
/// job indices into the shared `ProcessState` slice. The driver guarantees
/// that `admit` is called in arrival order, that arrivals during a slice
/// are admitted before the unfinished job is handed back with
/// `requeue`, and that `pick` is only called after all due admissions.
pub trait Scheduler {
    /// Take an arrived job into the ready structure.
    fn admit(&mut self, idx: usize, procs: &[ProcessState]);

    /// Pick the next job to dispatch, removing it from the ready structure.
    fn pick(&mut self, procs: &[ProcessState]) -> Option<usize>;

    /// How long the picked job may occupy the CPU before the policy gets
    /// another word. Non-preemptive policies run to completion.
    fn slice(&self, proc: &ProcessState, now: Time, next_arrival: Option<Time>) -> Duration {
        let _ = (now, next_arrival);
        proc.remaining
    }

    /// An unfinished job comes back after its slice ended.
    fn requeue(&mut self, idx: usize, procs: &[ProcessState]);
}

impl Scheduler for Box<dyn Scheduler> {
    #[inline]
    fn admit(&mut self, idx: usize, procs: &[ProcessState]) {
        (**self).admit(idx, procs)
    }

    #[inline]
    fn pick(&mut self, procs: &[ProcessState]) -> Option<usize> {
        (**self).pick(procs)
    }

    #[inline]
    fn slice(&self, proc: &ProcessState, now: Time, next_arrival: Option<Time>) -> Duration {
        (**self).slice(proc, now, next_arrival)
    }

    #[inline]
    fn requeue(&mut self, idx: usize, procs: &[ProcessState]) {
        (**self).requeue(idx, procs)
    }
}

/// Run one simulation: validate eagerly, build the policy, drive it to
/// completion. Pure in the sense of the caller contract: identical input
/// always yields an identical outcome, and no state survives the run.
pub fn simulate(jobs: Vec<Job>, cfg: &SchedulerConfig) -> Result<SimOutcome, SimError> {
    validate::check_jobs(&jobs)?;
    let scheduler = schedulers::from_config(cfg)?;
    Ok(schedule_loop(scheduler, jobs))
}

/// The driver loop: admit arrivals, ask the policy for a dispatch, execute
/// the slice, record the segment, finalize metrics on completion. Jumps
/// the clock over gaps as explicit idle segments.
pub fn schedule_loop(mut scheduler: impl Scheduler, jobs: Vec<Job>) -> SimOutcome {
    let mut procs: Vec<ProcessState> = jobs.into_iter().map(ProcessState::new).collect();

    // arrival cursor over (arrival, id)-sorted indices; each job is
    // admitted exactly once
    let mut order: Vec<usize> = (0..procs.len()).collect();
    order.sort_by(|&a, &b| {
        let (ja, jb) = (&procs[a].job, &procs[b].job);
        (ja.arrival, &ja.id).cmp(&(jb.arrival, &jb.id))
    });
    let mut arrivals = order.into_iter().peekable();

    let mut clock = Time(0);
    let mut timeline = TimelineBuilder::new();
    let mut unfinished = procs.len();

    while unfinished > 0 {
        while let Some(&idx) = arrivals.peek() {
            if procs[idx].job.arrival > clock {
                break;
            }
            scheduler.admit(idx, &procs);
            arrivals.next();
        }

        let idx = match scheduler.pick(&procs) {
            Some(idx) => idx,
            None => {
                // nothing ready, but unfinished jobs remain: they are all
                // still unarrived, so idle up to the next arrival
                match arrivals.peek() {
                    Some(&next) => {
                        let next_arrival = procs[next].job.arrival;
                        debug!(%clock, %next_arrival, "cpu idle");
                        timeline.record(clock, None);
                        clock = next_arrival;
                        continue;
                    }
                    None => break,
                }
            }
        };

        let next_arrival = arrivals.peek().map(|&i| procs[i].job.arrival);
        let run = scheduler.slice(&procs[idx], clock, next_arrival);
        debug_assert!(Duration(0) < run && run <= procs[idx].remaining);

        procs[idx].on_dispatch(clock);
        timeline.record(clock, Some(procs[idx].job.id.clone()));
        trace!(%clock, job = %procs[idx].job.id, %run, "dispatch");
        clock += run;
        procs[idx].remaining -= run;

        // jobs that arrived during the slice enter the ready structure
        // before the preempted job itself does (round robin fairness)
        while let Some(&i) = arrivals.peek() {
            if procs[i].job.arrival > clock {
                break;
            }
            scheduler.admit(i, &procs);
            arrivals.next();
        }

        if procs[idx].is_done() {
            procs[idx].finalize(clock);
            unfinished -= 1;
            debug!(%clock, proc = %procs[idx], "completed");
        } else {
            scheduler.requeue(idx, &procs);
        }
    }

    SimOutcome {
        timeline: timeline.finish(clock),
        processes: procs,
        makespan: clock,
    }
}
