//! Axum route handlers for job postings.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{JobRequirement, JobRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub description: String,
    /// Requirements are owned by the posting; absent criteria stay absent
    /// here and score as a vacuous pass at match time.
    #[serde(default)]
    pub requirements: JobRequirement,
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    if req.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if req.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }
    if let (Some(min), Some(max)) = (
        req.requirements.experience.min_years,
        req.requirements.experience.max_years,
    ) {
        if min > max {
            return Err(AppError::Validation(
                "experience min_years cannot exceed max_years".to_string(),
            ));
        }
    }

    let row: JobRow = sqlx::query_as(
        r#"
        INSERT INTO jobs (id, title, company, description, requirements)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(req.title.trim())
    .bind(req.company.trim())
    .bind(&req.description)
    .bind(sqlx::types::Json(&req.requirements))
    .fetch_one(&state.db)
    .await?;

    info!("Created job {} ({})", row.id, row.title);
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let rows = sqlx::query_as("SELECT * FROM jobs ORDER BY created_at DESC")
        .fetch_all(&state.db)
        .await?;
    Ok(Json(rows))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let row: Option<JobRow> = sqlx::query_as("SELECT * FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    let row = row.ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(row))
}
