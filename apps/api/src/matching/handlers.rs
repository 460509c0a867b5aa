//! Axum route handlers for the Match API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranker::{rank_jobs, RankedJob};
use crate::matching::scoring::MatchResult;
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub result: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub candidate_id: Uuid,
    pub matches: Vec<RankedJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/match/score
///
/// Scores one candidate against one posting without persisting anything.
/// Useful for previewing a fit before applying.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let candidate = fetch_active_candidate(&state, req.candidate_id).await?;

    let job: Option<JobRow> = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(req.job_id)
        .fetch_optional(&state.db)
        .await?;
    let job = job.ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;

    let result = state
        .matcher
        .score(&candidate.profile.0, &job.requirements.0)
        .await?;

    Ok(Json(ScoreResponse {
        candidate_id: req.candidate_id,
        job_id: req.job_id,
        result,
    }))
}

/// GET /api/v1/candidates/:id/matches
///
/// Ranks all open postings for a candidate, best fit first.
pub async fn handle_candidate_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchesResponse>, AppError> {
    let candidate = fetch_active_candidate(&state, id).await?;

    let jobs: Vec<JobRow> =
        sqlx::query_as("SELECT * FROM jobs WHERE status = 'open' ORDER BY created_at ASC")
            .fetch_all(&state.db)
            .await?;

    let matches = rank_jobs(&candidate.profile.0, jobs);

    Ok(Json(MatchesResponse {
        candidate_id: id,
        matches,
    }))
}

async fn fetch_active_candidate(state: &AppState, id: Uuid) -> Result<CandidateRow, AppError> {
    let candidate: Option<CandidateRow> =
        sqlx::query_as("SELECT * FROM candidates WHERE id = $1 AND is_active = TRUE")
            .bind(id)
            .fetch_optional(&state.db)
            .await?;
    candidate.ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))
}
