//! Axum route handlers for the KPI API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::kpi::fallback::FallbackKpiScore;
use crate::kpi::role::Role;
use crate::kpi::scorer::Basis;
use crate::kpi::service::{analyze_resume, fallback_survey, Evidence};
use crate::kpi::Level;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ResumeAnalysisRequest {
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct KpiScoreItem {
    pub kpi_id: u8,
    pub kpi_name: String,
    pub score: i32,
    pub level: Level,
    pub basis: Basis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub scores: Vec<KpiScoreItem>,
    pub strengths: Vec<u8>,
    pub weaknesses: Vec<u8>,
}

/// Five survey answers, one per question, each expected in 1–5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub q_b1: i32,
    pub q_b2: i32,
    pub q_b3: i32,
    pub q_b4: i32,
    pub q_b5: i32,
}

impl SurveyAnswers {
    pub fn as_array(&self) -> [i32; 5] {
        [self.q_b1, self.q_b2, self.q_b3, self.q_b4, self.q_b5]
    }
}

#[derive(Debug, Serialize)]
pub struct FallbackResponse {
    pub scores: Vec<FallbackKpiScore>,
    pub raw_inputs: SurveyAnswers,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/kpi/analyze/:role
pub async fn handle_analyze(
    State(state): State<AppState>,
    Path(role): Path<Role>,
    Json(req): Json<ResumeAnalysisRequest>,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    let analysis = analyze_resume(
        state.scorer.as_ref(),
        state.embedder.as_ref(),
        &req.resume_text,
        role,
    )
    .await?;

    let scores = analysis
        .assessments
        .into_iter()
        .map(|a| {
            let (reason, embedding) = match a.evidence {
                Evidence::Supported { reason, embedding } => (reason, embedding),
                Evidence::Absent => (None, None),
            };
            KpiScoreItem {
                kpi_id: a.kpi_id,
                kpi_name: a.kpi_name,
                score: a.score,
                level: a.level,
                basis: a.basis,
                reason,
                embedding,
            }
        })
        .collect();

    Ok(Json(ResumeAnalysisResponse {
        scores,
        strengths: analysis.strengths,
        weaknesses: analysis.weaknesses,
    }))
}

/// POST /api/v1/kpi/fallback/:role
///
/// The aggregator itself is total over any integers; the request boundary
/// still rejects answers outside 1–5 so client mistakes surface.
pub async fn handle_fallback(
    Path(role): Path<Role>,
    Json(req): Json<SurveyAnswers>,
) -> Result<Json<FallbackResponse>, AppError> {
    for (i, answer) in req.as_array().into_iter().enumerate() {
        if !(1..=5).contains(&answer) {
            return Err(AppError::Validation(format!(
                "q_b{} must be between 1 and 5, got {answer}",
                i + 1
            )));
        }
    }

    let scores = fallback_survey(role, req.as_array());
    Ok(Json(FallbackResponse {
        scores,
        raw_inputs: req,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_answers_roundtrip() {
        let json = r#"{"q_b1": 4, "q_b2": 3, "q_b3": 5, "q_b4": 2, "q_b5": 4}"#;
        let answers: SurveyAnswers = serde_json::from_str(json).unwrap();
        assert_eq!(answers.as_array(), [4, 3, 5, 2, 4]);
    }

    #[test]
    fn test_absent_reason_and_embedding_are_omitted_from_json() {
        let item = KpiScoreItem {
            kpi_id: 7,
            kpi_name: "Security, auth & access control".to_string(),
            score: 44,
            level: Level::Low,
            basis: Basis::None,
            reason: None,
            embedding: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("reason").is_none());
        assert!(json.get("embedding").is_none());
        assert_eq!(json["basis"], "none");
    }

    #[test]
    fn test_present_reason_serializes() {
        let item = KpiScoreItem {
            kpi_id: 1,
            kpi_name: "Web fundamentals".to_string(),
            score: 81,
            level: Level::High,
            basis: Basis::Explicit,
            reason: Some("Shipped a design system used by four teams.".to_string()),
            embedding: Some(vec![0.1, 0.2]),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["reason"], "Shipped a design system used by four teams.");
        assert_eq!(json["embedding"].as_array().unwrap().len(), 2);
    }
}
