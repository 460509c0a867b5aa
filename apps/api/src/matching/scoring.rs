//! Sub-score calculators and the weighted aggregator.
//!
//! All scores are integers in [0, 100]. Absent criteria score as a vacuous
//! pass (100) — the criterion is waived, not excluded from the weighted sum.
//! The `MatchScorer` trait is the swap seam; `AppState` holds it as
//! `Arc<dyn MatchScorer>` and the default backend is the pure heuristic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::skills::{match_required_skills, tokens_overlap};
use crate::models::candidate::{EducationEntry, ResumeProfile};
use crate::models::job::{EducationRequirement, JobRequirement};

/// Education sub-score when the candidate has no stream overlapping a
/// required one: fixed partial credit, not proportional.
const PARTIAL_EDUCATION_CREDIT: u32 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.3,
            education: 0.2,
        }
    }
}

/// Full match report for one candidate against one posting.
/// Ephemeral — persisted only as the denormalized `match_score` on an
/// application row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub skills_match: u32,
    pub experience_match: u32,
    pub education_match: u32,
    /// round(0.5*skills + 0.3*experience + 0.2*education)
    pub final_score: u32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// `round(100 * matching / required)`; 100 when nothing is required.
pub fn compute_skills_score(matching: usize, required: usize) -> u32 {
    if required == 0 {
        return 100;
    }
    (100.0 * matching as f64 / required as f64).round() as u32
}

/// Scores the candidate's experience-entry count against the posting's
/// minimum years. 100 when no minimum is set or the count meets it, else
/// proportional.
// TODO: this compares the NUMBER of experience entries against required
// YEARS, as the product shipped it. Derive years from entry duration
// strings once product confirms which was intended.
pub fn compute_experience_score(entry_count: usize, min_years: Option<u32>) -> u32 {
    let min = match min_years {
        None | Some(0) => return 100,
        Some(m) => m,
    };
    if entry_count as u32 >= min {
        100
    } else {
        (100.0 * entry_count as f64 / min as f64).round() as u32
    }
}

/// 100 when no stream is required or any candidate stream overlaps a
/// required one (bidirectional substring, case-insensitive); otherwise the
/// fixed partial credit.
pub fn compute_education_score(
    candidate: &[EducationEntry],
    required: &EducationRequirement,
) -> u32 {
    if required.streams.is_empty() {
        return 100;
    }
    for entry in candidate {
        let Some(stream) = entry.stream.as_deref() else {
            continue;
        };
        let stream = stream.to_lowercase();
        for req in &required.streams {
            if tokens_overlap(&stream, &req.to_lowercase()) {
                return 100;
            }
        }
    }
    PARTIAL_EDUCATION_CREDIT
}

/// Weighted sum, round-half-up on the float total. For sub-scores in
/// [0, 100] the result stays in [0, 100].
pub fn aggregate_score(skills: u32, experience: u32, education: u32, weights: &ScoreWeights) -> u32 {
    (weights.skills * skills as f64
        + weights.experience * experience as f64
        + weights.education * education as f64)
        .round() as u32
}

/// The heuristic match pipeline: normalize skills, compute the three
/// sub-scores, aggregate.
pub fn compute_match(profile: &ResumeProfile, requirement: &JobRequirement) -> MatchResult {
    let weights = ScoreWeights::default();

    let skill_match = match_required_skills(&profile.skills, &requirement.skills);
    let skills_match = compute_skills_score(skill_match.matching.len(), requirement.skills.len());
    let experience_match =
        compute_experience_score(profile.experience.len(), requirement.experience.min_years);
    let education_match = compute_education_score(&profile.education, &requirement.education);

    MatchResult {
        skills_match,
        experience_match,
        education_match,
        final_score: aggregate_score(skills_match, experience_match, education_match, &weights),
        matching_skills: skill_match.matching,
        missing_skills: skill_match.missing,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition + default backend
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer seam. Implement this to swap in another backend (e.g.
/// a semantic scorer) without touching handlers or the ranker.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        profile: &ResumeProfile,
        requirement: &JobRequirement,
    ) -> Result<MatchResult, AppError>;
}

/// Default backend: the pure heuristic above. Fast, deterministic, no LLM.
pub struct HeuristicMatchScorer;

#[async_trait]
impl MatchScorer for HeuristicMatchScorer {
    async fn score(
        &self,
        profile: &ResumeProfile,
        requirement: &JobRequirement,
    ) -> Result<MatchResult, AppError> {
        Ok(compute_match(profile, requirement))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::ExperienceRequirement;

    fn profile(skills: &[&str]) -> ResumeProfile {
        ResumeProfile {
            name: "Test Candidate".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn requirement(skills: &[&str]) -> JobRequirement {
        JobRequirement {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn education(stream: Option<&str>) -> EducationEntry {
        EducationEntry {
            degree: "B.Tech".to_string(),
            stream: stream.map(|s| s.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_required_skills_is_vacuous_pass() {
        assert_eq!(compute_skills_score(0, 0), 100);
    }

    #[test]
    fn test_all_required_skills_present_scores_100() {
        let m = compute_match(
            &profile(&["react", "Node.js", "SQL"]),
            &requirement(&["React", "Node.js"]),
        );
        assert_eq!(m.skills_match, 100);
        assert!(m.missing_skills.is_empty());
        assert_eq!(m.matching_skills, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_disjoint_skills_score_zero() {
        let m = compute_match(&profile(&["Java"]), &requirement(&["Python"]));
        assert_eq!(m.skills_match, 0);
        assert_eq!(m.missing_skills, vec!["Python"]);
    }

    #[test]
    fn test_partial_skills_round_half_up() {
        // 2 of 3 -> 66.67 -> 67
        assert_eq!(compute_skills_score(2, 3), 67);
        // 1 of 8 -> 12.5 -> 13
        assert_eq!(compute_skills_score(1, 8), 13);
    }

    #[test]
    fn test_experience_no_minimum_scores_100() {
        assert_eq!(compute_experience_score(0, None), 100);
        assert_eq!(compute_experience_score(0, Some(0)), 100);
    }

    #[test]
    fn test_experience_below_minimum_is_proportional() {
        // min 5, 2 entries -> 40
        assert_eq!(compute_experience_score(2, Some(5)), 40);
    }

    #[test]
    fn test_experience_at_or_above_minimum_scores_100() {
        assert_eq!(compute_experience_score(5, Some(5)), 100);
        assert_eq!(compute_experience_score(9, Some(5)), 100);
    }

    #[test]
    fn test_education_no_required_stream_scores_100() {
        let req = EducationRequirement::default();
        assert_eq!(compute_education_score(&[education(None)], &req), 100);
    }

    #[test]
    fn test_education_stream_overlap_scores_100() {
        let req = EducationRequirement {
            degree: None,
            streams: vec!["Computer Science".to_string()],
        };
        let entries = [education(Some("computer science and engineering"))];
        assert_eq!(compute_education_score(&entries, &req), 100);
    }

    #[test]
    fn test_education_mismatch_gets_fixed_partial_credit() {
        let req = EducationRequirement {
            degree: None,
            streams: vec!["Computer Science".to_string()],
        };
        let entries = [education(Some("Mechanical"))];
        assert_eq!(compute_education_score(&entries, &req), 60);
    }

    #[test]
    fn test_aggregate_extremes() {
        let w = ScoreWeights::default();
        assert_eq!(aggregate_score(100, 100, 100, &w), 100);
        assert_eq!(aggregate_score(0, 0, 0, &w), 0);
    }

    #[test]
    fn test_aggregate_weighted_sum_invariant() {
        let w = ScoreWeights::default();
        // 0.5*67 + 0.3*40 + 0.2*60 = 33.5 + 12 + 12 = 57.5 -> 58 (half-up)
        assert_eq!(aggregate_score(67, 40, 60, &w), 58);
    }

    #[test]
    fn test_final_score_bounded_for_valid_subscores() {
        let w = ScoreWeights::default();
        for s in [0u32, 13, 50, 67, 100] {
            for e in [0u32, 40, 100] {
                for ed in [60u32, 100] {
                    let f = aggregate_score(s, e, ed, &w);
                    assert!(f <= 100, "final {f} out of range for ({s},{e},{ed})");
                }
            }
        }
    }

    #[test]
    fn test_compute_match_upholds_aggregation_invariant() {
        let mut p = profile(&["react", "docker"]);
        p.experience = vec![Default::default(), Default::default()];
        p.education = vec![education(Some("Electronics"))];

        let req = JobRequirement {
            skills: vec!["React".to_string(), "Kafka".to_string(), "Go".to_string()],
            experience: ExperienceRequirement {
                min_years: Some(5),
                max_years: None,
                level: None,
            },
            education: EducationRequirement {
                degree: None,
                streams: vec!["Computer Science".to_string()],
            },
        };

        let m = compute_match(&p, &req);
        let expected = aggregate_score(
            m.skills_match,
            m.experience_match,
            m.education_match,
            &ScoreWeights::default(),
        );
        assert_eq!(m.final_score, expected);
    }

    #[tokio::test]
    async fn test_heuristic_scorer_matches_pure_function() {
        let p = profile(&["python"]);
        let req = requirement(&["Python"]);

        let via_trait = HeuristicMatchScorer.score(&p, &req).await.unwrap();
        let direct = compute_match(&p, &req);
        assert_eq!(via_trait.final_score, direct.final_score);
        assert_eq!(via_trait.skills_match, 100);
    }
}
