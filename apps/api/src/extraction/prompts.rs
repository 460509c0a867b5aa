// All LLM prompt constants for resume extraction.

/// System prompt for resume extraction — enforces JSON-only output.
pub const EXTRACT_SYSTEM: &str =
    "You are an expert technical recruiter and resume analyst. \
    Extract structured candidate information from a resume. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Extraction prompt template. Replace `{resume_text}` before sending.
pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract candidate information from the following resume text.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Jane Doe",
  "email": "jane@example.com",
  "phone": "+1 555 0100",
  "skills": ["React", "Node.js", "PostgreSQL"],
  "experience": [
    {
      "title": "Senior Engineer",
      "company": "Acme Corp",
      "duration": "2019 - 2023",
      "description": "Built the billing platform."
    }
  ],
  "education": [
    {
      "degree": "B.Tech",
      "school": "IIT Delhi",
      "year": 2015,
      "stream": "Computer Science"
    }
  ]
}

Rules for extraction:
- "skills" keeps the resume's wording and order; do not invent or expand skills.
- "duration" is copied verbatim from the resume; do not convert to years.
- "year" is the graduation year as an integer, or null if not stated.
- "stream" is the field of study, or null if not stated.
- Use null for "email" and "phone" when absent; never fabricate contact details.

Resume text:
---
{resume_text}
---
"#;
