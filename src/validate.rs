use std::collections::HashSet;

use thiserror::Error;

use crate::types::Job;

/// Input rejections. All of these are raised before the simulation clock
/// ever advances; a run either starts with fully valid input or not at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    #[error("job {id}: burst time must be positive")]
    NonPositiveBurst { id: String },
    #[error("job {id}: arrival time must be non-negative, got {arrival}")]
    NegativeArrival { id: String, arrival: i64 },
    #[error("duplicate job id: {id}")]
    DuplicateId { id: String },
    #[error("round robin quantum must be positive, got {0}")]
    InvalidQuantum(i64),
}

/// Reject any job set the engine must not run. An empty set is fine: it
/// produces an empty outcome, not an error.
pub fn check_jobs(jobs: &[Job]) -> Result<(), SimError> {
    let mut seen = HashSet::new();
    for job in jobs {
        if job.burst.0 == 0 {
            return Err(SimError::NonPositiveBurst { id: job.id.clone() });
        }
        if !seen.insert(job.id.as_str()) {
            return Err(SimError::DuplicateId { id: job.id.clone() });
        }
    }
    Ok(())
}
