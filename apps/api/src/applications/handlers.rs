//! Axum route handlers for applications.
//!
//! Applying is the one place a match score is persisted: the scorer runs at
//! apply time and the final score is denormalized onto the application row.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scoring::MatchResult;
use crate::models::application::ApplicationRow;
use crate::models::candidate::CandidateRow;
use crate::models::job::JobRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    pub candidate_id: Uuid,
    pub job_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ApplicationResponse {
    pub application: ApplicationRow,
    /// The full report behind the persisted `match_score`.
    pub result: MatchResult,
}

#[derive(Debug, Deserialize)]
pub struct JobIdQuery {
    pub job_id: Uuid,
}

/// POST /api/v1/applications
pub async fn handle_create_application(
    State(state): State<AppState>,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationResponse>), AppError> {
    let candidate: Option<CandidateRow> =
        sqlx::query_as("SELECT * FROM candidates WHERE id = $1 AND is_active = TRUE")
            .bind(req.candidate_id)
            .fetch_optional(&state.db)
            .await?;
    let candidate = candidate
        .ok_or_else(|| AppError::NotFound(format!("Candidate {} not found", req.candidate_id)))?;

    let job: Option<JobRow> = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(req.job_id)
        .fetch_optional(&state.db)
        .await?;
    let job = job.ok_or_else(|| AppError::NotFound(format!("Job {} not found", req.job_id)))?;
    if job.status != "open" {
        return Err(AppError::Validation(format!(
            "job {} is not open for applications",
            job.id
        )));
    }

    let existing: Option<(Uuid,)> =
        sqlx::query_as("SELECT id FROM applications WHERE candidate_id = $1 AND job_id = $2")
            .bind(req.candidate_id)
            .bind(req.job_id)
            .fetch_optional(&state.db)
            .await?;
    if existing.is_some() {
        return Err(AppError::Conflict(
            "candidate has already applied to this job".to_string(),
        ));
    }

    let result = state
        .matcher
        .score(&candidate.profile.0, &job.requirements.0)
        .await?;

    let application: ApplicationRow = sqlx::query_as(
        r#"
        INSERT INTO applications (id, candidate_id, job_id, match_score)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.candidate_id)
    .bind(req.job_id)
    .bind(result.final_score as i32)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Candidate {} applied to job {} with match score {}",
        req.candidate_id, req.job_id, application.match_score
    );
    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse {
            application,
            result,
        }),
    ))
}

/// GET /api/v1/applications?job_id= — best match first.
pub async fn handle_list_applications(
    State(state): State<AppState>,
    Query(params): Query<JobIdQuery>,
) -> Result<Json<Vec<ApplicationRow>>, AppError> {
    let rows = sqlx::query_as(
        "SELECT * FROM applications WHERE job_id = $1 ORDER BY match_score DESC, created_at ASC",
    )
    .bind(params.job_id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}
