use serde::{Deserialize, Serialize};

use crate::types::{ProcessState, Time};

/// Aggregate statistics over the finalized per-job records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub jobs: usize,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub makespan: Time,
}

impl Summary {
    /// Pure reduction over finalized records. Unfinished records (which a
    /// completed run never contains) count as zero.
    pub fn from_run(processes: &[ProcessState], makespan: Time) -> Self {
        let n = processes.len();
        let total_waiting: u64 = processes.iter().filter_map(|p| p.waiting).map(|w| w.0).sum();
        let total_turnaround: u64 = processes
            .iter()
            .filter_map(|p| p.turnaround)
            .map(|t| t.0)
            .sum();
        Summary {
            jobs: n,
            avg_waiting: if n == 0 { 0.0 } else { total_waiting as f64 / n as f64 },
            avg_turnaround: if n == 0 { 0.0 } else { total_turnaround as f64 / n as f64 },
            makespan,
        }
    }
}
