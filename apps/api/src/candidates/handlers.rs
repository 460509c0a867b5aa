//! Axum route handlers for candidate profiles.
//!
//! Creation runs LLM extraction over the submitted resume text; everything
//! after creation is read-only except the soft delete.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::extract_profile;
use crate::models::candidate::CandidateRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCandidateRequest {
    pub resume_text: String,
    /// Overrides for when the uploader already knows the contact fields;
    /// extraction fills whatever is not supplied.
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// POST /api/v1/candidates
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(req): Json<CreateCandidateRequest>,
) -> Result<(StatusCode, Json<CandidateRow>), AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let profile = extract_profile(&req.resume_text, state.llm.as_ref()).await;

    let full_name = req
        .full_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| profile.name.clone());
    if full_name.trim().is_empty() {
        return Err(AppError::Validation(
            "could not determine candidate name; supply full_name".to_string(),
        ));
    }
    let email = req.email.or_else(|| profile.email.clone());
    let phone = req.phone.or_else(|| profile.phone.clone());

    let row: CandidateRow = sqlx::query_as(
        r#"
        INSERT INTO candidates (id, full_name, email, phone, profile, resume_text)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(full_name.trim())
    .bind(&email)
    .bind(&phone)
    .bind(sqlx::types::Json(&profile))
    .bind(&req.resume_text)
    .fetch_one(&state.db)
    .await?;

    info!(
        "Created candidate {} ({} skills extracted)",
        row.id,
        profile.skills.len()
    );
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/candidates — active candidates only.
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<CandidateRow>>, AppError> {
    let rows = sqlx::query_as(
        "SELECT * FROM candidates WHERE is_active = TRUE ORDER BY created_at DESC",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

/// GET /api/v1/candidates/:id
///
/// Returns soft-deleted rows too — they are retained for audit and the
/// `is_active` flag tells the caller which case it is.
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CandidateRow>, AppError> {
    let row: Option<CandidateRow> = sqlx::query_as("SELECT * FROM candidates WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await?;
    let row = row.ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(row))
}

/// DELETE /api/v1/candidates/:id — soft delete; the row is retained.
pub async fn handle_delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query(
        "UPDATE candidates SET is_active = FALSE WHERE id = $1 AND is_active = TRUE",
    )
    .bind(id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Candidate {id} not found or already deleted"
        )));
    }

    info!("Soft-deleted candidate {id}");
    Ok(StatusCode::NO_CONTENT)
}
