use std::fmt;
use std::ops::{Add, AddAssign, Deref, Sub, SubAssign};

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A time point in simulation, in integer ticks
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub struct Time(pub u64);

/// A duration of time in simulation, in integer ticks
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub struct Duration(pub u64);

impl Deref for Duration {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Add<Duration> for Time {
    type Output = Time;

    fn add(self, rhs: Duration) -> Self::Output {
        Time(self.0 + rhs.0)
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0;
    }
}

impl Sub for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0 - rhs.0)
    }
}

impl Add for Duration {
    type Output = Duration;

    fn add(self, rhs: Self) -> Self::Output {
        Duration(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Duration {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0 - rhs.0)
    }
}

impl SubAssign for Duration {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

/// An input job descriptor, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Job ID, unique within a run
    pub id: String,
    /// Instant the job becomes ready
    pub arrival: Time,
    /// Total CPU time the job requires
    pub burst: Duration,
    /// Lower value means more urgent
    pub priority: i32,
}

impl Job {
    pub fn new(id: impl Into<String>, arrival: u64, burst: u64, priority: i32) -> Self {
        Job {
            id: id.into(),
            arrival: Time(arrival),
            burst: Duration(burst),
            priority,
        }
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Job({}, @{}+{}, prio {})", self.id, self.arrival, self.burst, self.priority)
    }
}

/// Per-run simulation record, one per job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessState {
    pub job: Job,
    /// CPU time still owed, counts down from `job.burst` to zero
    pub remaining: Duration,
    /// Instant of the very first dispatch, set exactly once
    pub start: Option<Time>,
    /// Instant `remaining` reached zero, set exactly once
    pub completion: Option<Time>,
    /// completion - arrival
    pub turnaround: Option<Duration>,
    /// turnaround - burst
    pub waiting: Option<Duration>,
}

impl ProcessState {
    pub fn new(job: Job) -> Self {
        let remaining = job.burst;
        ProcessState {
            job,
            remaining,
            start: None,
            completion: None,
            turnaround: None,
            waiting: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.remaining.0 == 0
    }

    /// Record the first dispatch. Resumptions after preemption keep the
    /// original start time.
    pub fn on_dispatch(&mut self, now: Time) {
        if self.start.is_none() {
            self.start = Some(now);
        }
    }

    /// Close the record once the job has run down to zero remaining time.
    pub fn finalize(&mut self, now: Time) {
        debug_assert!(self.is_done());
        let turnaround = now - self.job.arrival;
        self.completion = Some(now);
        self.turnaround = Some(turnaround);
        self.waiting = Some(turnaround - self.job.burst);
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.completion {
            Some(c) => write!(f, "ProcessState({}, done @{})", self.job.id, c),
            None => write!(f, "ProcessState({}, {} left)", self.job.id, self.remaining),
        }
    }
}

/// One interval of uninterrupted execution on the Gantt chart.
/// `job` is `None` for an idle interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    pub start: Time,
    /// Exclusive
    pub end: Time,
    pub job: Option<String>,
}

impl GanttSegment {
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    pub fn is_idle(&self) -> bool {
        self.job.is_none()
    }
}

impl fmt::Display for GanttSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.job {
            Some(id) => write!(f, "[{}, {}) {}", self.start, self.end, id),
            None => write!(f, "[{}, {}) idle", self.start, self.end),
        }
    }
}

/// Everything a finished run hands back to its caller: read-only data,
/// no behavior attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimOutcome {
    pub processes: Vec<ProcessState>,
    pub timeline: Vec<GanttSegment>,
    /// The clock value at which the last job completed
    pub makespan: Time,
}
