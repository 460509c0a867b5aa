//! Axum route handlers for interview scheduling and feedback.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::application::ApplicationRow;
use crate::models::interview::{InterviewFeedbackRow, InterviewSlotRow, SlotStatus};
use crate::scheduling::slots::{is_expired, slot_expiry, try_confirm, try_decline};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OfferSlotRequest {
    pub application_id: Uuid,
    /// When the interview itself takes place.
    pub starts_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationIdQuery {
    pub application_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub interviewer: String,
    pub rating: i16,
    pub comments: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/interviews
///
/// Offers an interview slot against an application. The offer expires
/// 24 hours from now unless confirmed or declined.
pub async fn handle_offer_slot(
    State(state): State<AppState>,
    Json(req): Json<OfferSlotRequest>,
) -> Result<Json<InterviewSlotRow>, AppError> {
    let application: Option<ApplicationRow> =
        sqlx::query_as("SELECT * FROM applications WHERE id = $1")
            .bind(req.application_id)
            .fetch_optional(&state.db)
            .await?;
    if application.is_none() {
        return Err(AppError::NotFound(format!(
            "Application {} not found",
            req.application_id
        )));
    }

    let now = Utc::now();
    if req.starts_at <= now {
        return Err(AppError::Validation(
            "starts_at must be in the future".to_string(),
        ));
    }

    let slot = InterviewSlotRow {
        id: Uuid::new_v4(),
        application_id: req.application_id,
        starts_at: req.starts_at,
        offered_at: now,
        expires_at: slot_expiry(now),
        status: SlotStatus::Offered,
        created_at: now,
    };
    let slot = state.slots.insert(slot).await?;

    info!(
        "Offered interview slot {} for application {} (expires {})",
        slot.id, slot.application_id, slot.expires_at
    );
    Ok(Json(slot))
}

/// POST /api/v1/interviews/:id/confirm
pub async fn handle_confirm_slot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSlotRow>, AppError> {
    let slot = fetch_slot(&state, id).await?;

    let now = Utc::now();
    if is_expired(&slot, now) {
        state.slots.set_status(id, SlotStatus::Expired).await?;
        return Err(AppError::Validation("slot offer has expired".to_string()));
    }

    let next = try_confirm(&slot, now)?;
    let updated = state.slots.set_status(id, next).await?;
    info!("Confirmed interview slot {id}");
    Ok(Json(updated))
}

/// POST /api/v1/interviews/:id/decline
pub async fn handle_decline_slot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InterviewSlotRow>, AppError> {
    let slot = fetch_slot(&state, id).await?;

    if is_expired(&slot, Utc::now()) {
        state.slots.set_status(id, SlotStatus::Expired).await?;
        return Err(AppError::Validation("slot offer has expired".to_string()));
    }

    let next = try_decline(&slot)?;
    let updated = state.slots.set_status(id, next).await?;
    info!("Declined interview slot {id}");
    Ok(Json(updated))
}

/// GET /api/v1/interviews?application_id=
///
/// Sweeps overdue offers before listing so callers never see a stale
/// "offered" status.
pub async fn handle_list_slots(
    State(state): State<AppState>,
    Query(params): Query<ApplicationIdQuery>,
) -> Result<Json<Vec<InterviewSlotRow>>, AppError> {
    state.slots.expire_overdue(Utc::now()).await?;
    let slots = state.slots.list_for_application(params.application_id).await?;
    Ok(Json(slots))
}

/// POST /api/v1/interviews/:id/feedback
///
/// Feedback hangs off confirmed slots only.
pub async fn handle_create_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FeedbackRequest>,
) -> Result<Json<InterviewFeedbackRow>, AppError> {
    if !(1..=5).contains(&req.rating) {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    if req.interviewer.trim().is_empty() {
        return Err(AppError::Validation(
            "interviewer cannot be empty".to_string(),
        ));
    }

    let slot = fetch_slot(&state, id).await?;
    if slot.status != SlotStatus::Confirmed {
        return Err(AppError::Validation(format!(
            "feedback requires a confirmed slot; slot is {}",
            slot.status
        )));
    }

    let row: InterviewFeedbackRow = sqlx::query_as(
        r#"
        INSERT INTO interview_feedback (id, slot_id, interviewer, rating, comments)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(slot.id)
    .bind(req.interviewer.trim())
    .bind(req.rating)
    .bind(&req.comments)
    .fetch_one(&state.db)
    .await?;

    info!("Recorded feedback {} for slot {}", row.id, slot.id);
    Ok(Json(row))
}

/// GET /api/v1/interviews/:id/feedback
pub async fn handle_list_feedback(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<InterviewFeedbackRow>>, AppError> {
    // 404 on unknown slot rather than an empty list
    fetch_slot(&state, id).await?;

    let rows = sqlx::query_as(
        "SELECT * FROM interview_feedback WHERE slot_id = $1 ORDER BY created_at ASC",
    )
    .bind(id)
    .fetch_all(&state.db)
    .await?;
    Ok(Json(rows))
}

async fn fetch_slot(state: &AppState, id: Uuid) -> Result<InterviewSlotRow, AppError> {
    state
        .slots
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview slot {id} not found")))
}
