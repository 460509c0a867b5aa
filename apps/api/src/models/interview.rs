use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle of an offered interview slot. Maps to the `slot_status`
/// Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "slot_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Offered,
    Confirmed,
    Declined,
    Expired,
}

impl std::fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SlotStatus::Offered => "offered",
            SlotStatus::Confirmed => "confirmed",
            SlotStatus::Declined => "declined",
            SlotStatus::Expired => "expired",
        };
        f.write_str(s)
    }
}

/// A discrete interview time offered against an application.
/// `expires_at` is fixed at offer time; unconfirmed slots expire there.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewSlotRow {
    pub id: Uuid,
    pub application_id: Uuid,
    /// When the interview itself takes place.
    pub starts_at: DateTime<Utc>,
    pub offered_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub status: SlotStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewFeedbackRow {
    pub id: Uuid,
    pub slot_id: Uuid,
    pub interviewer: String,
    /// 1 (no hire) .. 5 (strong hire).
    pub rating: i16,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
