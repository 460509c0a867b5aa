//! Job Ranker — scores a candidate against a set of postings and orders
//! them best-fit first.

use serde::{Deserialize, Serialize};

use crate::matching::scoring::{compute_match, MatchResult};
use crate::models::candidate::ResumeProfile;
use crate::models::job::JobRow;

/// A posting with its match report attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJob {
    pub job: JobRow,
    pub result: MatchResult,
}

/// Computes a MatchResult per posting and sorts by final score descending.
/// Ties keep the input order (`sort_by` is stable), which makes ranking
/// deterministic for equal scores.
pub fn rank_jobs(profile: &ResumeProfile, jobs: Vec<JobRow>) -> Vec<RankedJob> {
    let mut ranked: Vec<RankedJob> = jobs
        .into_iter()
        .map(|job| {
            let result = compute_match(profile, &job.requirements.0);
            RankedJob { job, result }
        })
        .collect();

    ranked.sort_by(|a, b| b.result.final_score.cmp(&a.result.final_score));
    ranked
}
