// All LLM prompt constants for KPI scoring.
// The KPI module owns its own prompts; llm_client stays transport-only.

use crate::kpi::role::Role;

/// System prompt for résumé scoring — enforces JSON-only output.
pub const SCORING_SYSTEM: &str =
    "You are an expert technical recruiter scoring a candidate resume \
    against a fixed competency rubric. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Scoring prompt template. Replace `{role}`, `{kpi_list}`, `{resume_text}`
/// before sending.
const SCORING_PROMPT_TEMPLATE: &str = r#"Score the following resume for the {role} track against the ten KPIs below.

KPIS (use these exact ids):
{kpi_list}

Return a JSON object keyed by KPI id ("1" through "10"), every id present, each value with this EXACT schema (no extra fields):
{
  "1": {"score": 72, "level": "mid", "basis": "explicit", "reason": "Led the migration of a monolith to six services."}
}

Rules for scoring:
- score: integer from 40 to 90.
- level: "high" (score >= 75), "mid" (50-74), "low" (< 50).
- basis: "explicit" when the resume states the skill directly, "inferred" when it only follows indirectly, "none" when the resume gives no evidence at all.

Rules for reason (mandatory):
- Exactly one declarative sentence, ending in a single period.
- 20 to 80 characters.
- Candidate perspective: summarize a concrete experience, skill, or outcome from the resume. No abstract commentary, no score justification.
- When basis is "none", set reason to an empty string.

RESUME:
{resume_text}"#;

/// Builds the scoring prompt for one résumé and role.
pub fn build_scoring_prompt(resume_text: &str, role: Role) -> String {
    let kpi_list = role
        .rubric()
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n");

    SCORING_PROMPT_TEMPLATE
        .replace("{role}", role.as_str())
        .replace("{kpi_list}", &kpi_list)
        .replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_all_ten_kpis() {
        let prompt = build_scoring_prompt("some resume", Role::Backend);
        for (i, name) in Role::Backend.rubric().names.iter().enumerate() {
            assert!(prompt.contains(&format!("{}. {}", i + 1, name)));
        }
    }

    #[test]
    fn test_prompt_substitutes_role_and_resume() {
        let prompt = build_scoring_prompt("RESUME_BODY_MARKER", Role::Designer);
        assert!(prompt.contains("designer track"));
        assert!(prompt.contains("RESUME_BODY_MARKER"));
        assert!(!prompt.contains("{role}"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
