//! Resume field extraction — turns raw resume text into a `ResumeProfile`
//! via the text-generation collaborator.
//!
//! Best-effort by contract: a malformed LLM response or a provider failure
//! falls back to an empty profile instead of failing candidate creation.
//! The raw resume text is kept on the candidate row either way.

pub mod prompts;

use tracing::warn;

use crate::llm_client::{strip_json_fences, TextGenerator};
use crate::extraction::prompts::{EXTRACT_PROMPT_TEMPLATE, EXTRACT_SYSTEM};
use crate::models::candidate::ResumeProfile;

/// Extracts structured fields from resume text. Never fails: parse or
/// provider errors degrade to `ResumeProfile::default()` with a warning.
pub async fn extract_profile(resume_text: &str, llm: &dyn TextGenerator) -> ResumeProfile {
    let prompt = EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    let text = match llm.generate(&prompt, EXTRACT_SYSTEM).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Resume extraction LLM call failed, using empty profile: {e}");
            return ResumeProfile::default();
        }
    };

    match serde_json::from_str::<ResumeProfile>(strip_json_fences(&text)) {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Resume extraction returned unparseable JSON, using empty profile: {e}");
            ResumeProfile::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::llm_client::LlmError;

    /// Canned-output collaborator for tests.
    struct StaticGenerator {
        reply: Result<&'static str, ()>,
    }

    #[async_trait]
    impl TextGenerator for StaticGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(()) => Err(LlmError::EmptyContent),
            }
        }
    }

    const VALID_PROFILE: &str = r#"{
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "skills": ["Rust", "SQL"],
        "experience": [
            {"title": "Engineer", "company": "Analytical Engines", "duration": "1842 - 1843", "description": "Wrote the first program."}
        ],
        "education": [
            {"degree": "B.Sc", "school": "London", "year": 1840, "stream": "Mathematics"}
        ]
    }"#;

    #[tokio::test]
    async fn test_valid_json_parses_into_profile() {
        let llm = StaticGenerator {
            reply: Ok(VALID_PROFILE),
        };
        let profile = extract_profile("raw resume", &llm).await;
        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
        assert_eq!(profile.experience.len(), 1);
        assert_eq!(profile.education[0].stream.as_deref(), Some("Mathematics"));
    }

    #[tokio::test]
    async fn test_fenced_json_still_parses() {
        let llm = StaticGenerator {
            reply: Ok("```json\n{\"name\": \"Ada\", \"skills\": [\"Rust\"]}\n```"),
        };
        let profile = extract_profile("raw resume", &llm).await;
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_missing_fields_default_instead_of_failing() {
        let llm = StaticGenerator {
            reply: Ok("{\"name\": \"Ada\"}"),
        };
        let profile = extract_profile("raw resume", &llm).await;
        assert_eq!(profile.name, "Ada");
        assert!(profile.skills.is_empty());
        assert!(profile.experience.is_empty());
    }

    #[tokio::test]
    async fn test_garbage_output_falls_back_to_empty_profile() {
        let llm = StaticGenerator {
            reply: Ok("Sorry, I cannot parse this resume."),
        };
        let profile = extract_profile("raw resume", &llm).await;
        assert_eq!(profile, ResumeProfile::default());
    }

    #[tokio::test]
    async fn test_provider_error_falls_back_to_empty_profile() {
        let llm = StaticGenerator { reply: Err(()) };
        let profile = extract_profile("raw resume", &llm).await;
        assert_eq!(profile, ResumeProfile::default());
    }
}
