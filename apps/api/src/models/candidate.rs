use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One position held by a candidate. `duration` is free text as it appears
/// on the resume ("2019 - 2022", "3 years", ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub year: Option<i32>,
    /// Field of study ("Computer Science", "Electronics", ...).
    #[serde(default)]
    pub stream: Option<String>,
}

/// Structured fields extracted from a resume. Created once per upload and
/// immutable afterwards; the owning candidate row carries the soft-delete flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    /// Ordered as listed on the resume.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CandidateRow {
    pub id: Uuid,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub profile: Json<ResumeProfile>,
    /// Raw resume text as submitted, kept for re-extraction and audit.
    pub resume_text: String,
    /// Soft delete: flips to false, row is retained.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
