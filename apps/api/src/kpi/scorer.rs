//! Résumé scorer — pluggable, trait-based seam around the LLM call.
//!
//! `AppState` holds an `Arc<dyn Scorer>`; the production backend is
//! `LlmScorer`, tests substitute deterministic implementations.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::kpi::prompts::{build_scoring_prompt, SCORING_SYSTEM};
use crate::kpi::role::Role;
use crate::kpi::rubric::KPI_COUNT;
use crate::kpi::Level;
use crate::llm_client::LlmClient;

/// Evidence strength behind a model-produced KPI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Basis {
    Explicit,
    Inferred,
    None,
}

/// One KPI rating as returned by a scorer backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawKpiScore {
    pub score: i32,
    pub level: Level,
    pub basis: Basis,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Scores a résumé against a role's ten KPIs.
///
/// Implementations must return exactly the ids 1..=10.
#[async_trait]
pub trait Scorer: Send + Sync {
    async fn score(
        &self,
        resume_text: &str,
        role: Role,
    ) -> Result<BTreeMap<u8, RawKpiScore>, AppError>;
}

/// Production scorer backed by the Claude Messages API.
pub struct LlmScorer {
    llm: LlmClient,
}

impl LlmScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Scorer for LlmScorer {
    async fn score(
        &self,
        resume_text: &str,
        role: Role,
    ) -> Result<BTreeMap<u8, RawKpiScore>, AppError> {
        let prompt = build_scoring_prompt(resume_text, role);
        let raw: BTreeMap<String, RawKpiScore> = self
            .llm
            .call_json(&prompt, SCORING_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("KPI scoring failed: {e}")))?;

        let mut scores = BTreeMap::new();
        for (key, value) in raw {
            let kpi_id: u8 = key.parse().map_err(|_| {
                AppError::Llm(format!("scorer returned non-numeric KPI id '{key}'"))
            })?;
            scores.insert(kpi_id, value);
        }

        validate_ids(&scores)?;
        Ok(scores)
    }
}

/// The scorer contract requires exactly the ids 1..=10.
fn validate_ids(scores: &BTreeMap<u8, RawKpiScore>) -> Result<(), AppError> {
    let got: Vec<u8> = scores.keys().copied().collect();
    let expected: Vec<u8> = (1..=KPI_COUNT).collect();
    if got != expected {
        return Err(AppError::Llm(format!(
            "scorer returned KPI ids {got:?}, expected 1..=10"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(score: i32) -> RawKpiScore {
        RawKpiScore {
            score,
            level: Level::from_score(score),
            basis: Basis::Explicit,
            reason: Some("Did the thing well.".to_string()),
        }
    }

    #[test]
    fn test_validate_ids_accepts_full_set() {
        let scores: BTreeMap<u8, RawKpiScore> = (1..=10).map(|id| (id, raw(60))).collect();
        assert!(validate_ids(&scores).is_ok());
    }

    #[test]
    fn test_validate_ids_rejects_missing_id() {
        let scores: BTreeMap<u8, RawKpiScore> = (1..=9).map(|id| (id, raw(60))).collect();
        assert!(validate_ids(&scores).is_err());
    }

    #[test]
    fn test_validate_ids_rejects_out_of_range_id() {
        let mut scores: BTreeMap<u8, RawKpiScore> = (1..=10).map(|id| (id, raw(60))).collect();
        scores.insert(11, raw(60));
        assert!(validate_ids(&scores).is_err());
    }

    #[test]
    fn test_raw_kpi_score_deserializes_wire_shape() {
        let json = r#"{"score": 82, "level": "high", "basis": "explicit", "reason": "Ran the on-call rotation for two years."}"#;
        let parsed: RawKpiScore = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.score, 82);
        assert_eq!(parsed.level, Level::High);
        assert_eq!(parsed.basis, Basis::Explicit);
        assert!(parsed.reason.is_some());
    }

    #[test]
    fn test_raw_kpi_score_reason_defaults_to_none() {
        let json = r#"{"score": 45, "level": "low", "basis": "none"}"#;
        let parsed: RawKpiScore = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.basis, Basis::None);
        assert_eq!(parsed.reason, None);
    }
}
