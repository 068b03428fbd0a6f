use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::models::job::{JobApplication, JobStatus};

/// Dashboard counters over the current collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub total: usize,
    /// Distinct company names, compared exactly.
    pub companies: usize,
    /// Every status appears, including those with a zero count.
    pub by_status: BTreeMap<&'static str, usize>,
}

pub fn compute_stats(jobs: &[JobApplication]) -> JobStats {
    let mut by_status: BTreeMap<&'static str, usize> =
        JobStatus::ALL.iter().map(|s| (s.as_str(), 0)).collect();
    for job in jobs {
        *by_status.entry(job.status.as_str()).or_default() += 1;
    }

    let companies = jobs
        .iter()
        .map(|job| job.company_name.as_str())
        .collect::<HashSet<_>>()
        .len();

    JobStats {
        total: jobs.len(),
        companies,
        by_status,
    }
}
