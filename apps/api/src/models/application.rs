use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A candidate's application to a job. `match_score` is denormalized at
/// apply time from the scorer output; it is not recomputed afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationRow {
    pub id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub match_score: i32,
    /// "applied" | "shortlisted" | "rejected"
    pub status: String,
    pub created_at: DateTime<Utc>,
}
