//! Skill token normalization and matching between a candidate profile and
//! a posting's required skills.

/// Shorthand labels folded to their canonical form before comparison.
/// Kept deliberately small — no stemming, no synonym expansion.
const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("k8s", "kubernetes"),
    ("postgres", "postgresql"),
    ("gcp", "google cloud"),
];

/// Lower-cases, trims, and resolves aliases.
pub fn normalize_skill(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    for (alias, canonical) in SKILL_ALIASES {
        if lower == *alias {
            return (*canonical).to_string();
        }
    }
    lower
}

/// Bidirectional substring test on normalized tokens: "react" matches
/// "react.js" and "javascript" matches "java". The false positive is the
/// product's accepted behavior, so it stays.
pub fn tokens_overlap(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Partition of a posting's required skills against a candidate's list.
/// Entries keep the posting's original casing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillMatch {
    pub matching: Vec<String>,
    pub missing: Vec<String>,
}

/// A required skill counts as present when any normalized candidate skill
/// overlaps it in either direction. Missing = required minus matching.
pub fn match_required_skills(candidate: &[String], required: &[String]) -> SkillMatch {
    let normalized: Vec<String> = candidate.iter().map(|s| normalize_skill(s)).collect();

    let mut result = SkillMatch::default();
    for req in required {
        let req_norm = normalize_skill(req);
        if normalized.iter().any(|c| tokens_overlap(c, &req_norm)) {
            result.matching.push(req.clone());
        } else {
            result.missing.push(req.clone());
        }
    }
    result
}
