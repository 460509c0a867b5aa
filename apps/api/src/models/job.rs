use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Seniority band requested by a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
    Lead,
}

/// Experience bounds for a posting. All fields optional: an absent minimum
/// means the criterion is waived and scores as a vacuous pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    #[serde(default)]
    pub min_years: Option<u32>,
    #[serde(default)]
    pub max_years: Option<u32>,
    #[serde(default)]
    pub level: Option<ExperienceLevel>,
}

/// Education criterion. An empty `streams` list waives the criterion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationRequirement {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub streams: Vec<String>,
}

/// Requirements owned by a job posting; lifecycle tied to the posting row.
///
/// Optional criteria are explicit here — handlers never patch missing fields
/// with defaults at the call site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: ExperienceRequirement,
    #[serde(default)]
    pub education: EducationRequirement,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub requirements: Json<JobRequirement>,
    /// "open" | "closed"
    pub status: String,
    pub created_at: DateTime<Utc>,
}
