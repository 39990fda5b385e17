use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::Job;
use crate::utils::prelude::*;
use crate::validate::SimError;

/// One job row as written by the user, either inline in the config file or
/// as a CSV record. Jobs without an explicit id get `P<n>` assigned by
/// position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSpec {
    #[serde(default)]
    pub id: Option<String>,
    pub arrival: i64,
    pub burst: i64,
    #[serde(default)]
    pub priority: i32,
}

/// Where the job set comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WorkloadConfig {
    Inline { jobs: Vec<JobSpec> },
    /// CSV with a `id,arrival,burst,priority` header, id and priority
    /// columns optional
    Csv { path: PathBuf },
}

pub fn from_config(cfg: &WorkloadConfig) -> Result<Vec<Job>> {
    let specs = match cfg {
        WorkloadConfig::Inline { jobs } => jobs.clone(),
        WorkloadConfig::Csv { path } => read_csv(path)?,
    };
    debug!(n_jobs = specs.len(), "loaded workload");
    Ok(into_jobs(specs)?)
}

fn read_csv(path: &Path) -> Result<Vec<JobSpec>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut specs = Vec::new();
    for record in reader.deserialize() {
        specs.push(record?);
    }
    Ok(specs)
}

/// Range-check the raw rows and turn them into engine jobs. Rejections
/// happen here, before any simulation state exists.
pub fn into_jobs(specs: Vec<JobSpec>) -> std::result::Result<Vec<Job>, SimError> {
    specs
        .into_iter()
        .enumerate()
        .map(|(n, spec)| {
            let id = spec.id.unwrap_or_else(|| format!("P{}", n + 1));
            if spec.arrival < 0 {
                return Err(SimError::NegativeArrival {
                    id,
                    arrival: spec.arrival,
                });
            }
            if spec.burst <= 0 {
                return Err(SimError::NonPositiveBurst { id });
            }
            Ok(Job::new(id, spec.arrival as u64, spec.burst as u64, spec.priority))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: Option<&str>, arrival: i64, burst: i64) -> JobSpec {
        JobSpec {
            id: id.map(|s| s.to_owned()),
            arrival,
            burst,
            priority: 0,
        }
    }

    #[test]
    fn generates_missing_ids_by_position() {
        let jobs = into_jobs(vec![spec(None, 0, 4), spec(Some("io"), 1, 2), spec(None, 2, 6)]).unwrap();
        let ids: Vec<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "io", "P3"]);
    }

    #[test]
    fn rejects_negative_arrival() {
        let err = into_jobs(vec![spec(Some("P1"), -1, 4)]).unwrap_err();
        assert_eq!(
            err,
            SimError::NegativeArrival {
                id: "P1".into(),
                arrival: -1
            }
        );
    }

    #[test]
    fn rejects_non_positive_burst() {
        let err = into_jobs(vec![spec(None, 0, 0)]).unwrap_err();
        assert_eq!(err, SimError::NonPositiveBurst { id: "P1".into() });
    }
}
