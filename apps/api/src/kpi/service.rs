//! KPI analysis orchestration: model scoring, reason normalization, batched
//! embedding, and strengths/weaknesses extraction.

use tracing::warn;

use crate::embedding::Embedder;
use crate::errors::AppError;
use crate::kpi::fallback::{aggregate_survey, FallbackKpiScore};
use crate::kpi::normalize::{normalize_reason, MAX_REASON_LEN};
use crate::kpi::role::Role;
use crate::kpi::scorer::{Basis, Scorer};
use crate::kpi::Level;

/// Evidence attached to a model-scored KPI.
///
/// `basis == none` maps to `Absent`: the reason and the embedding are absent
/// together, never one without the other.
#[derive(Debug, Clone)]
pub enum Evidence {
    Supported {
        reason: Option<String>,
        embedding: Option<Vec<f32>>,
    },
    Absent,
}

/// One fully assembled KPI assessment from the model path.
#[derive(Debug, Clone)]
pub struct KpiAssessment {
    pub kpi_id: u8,
    pub kpi_name: String,
    pub score: i32,
    pub level: Level,
    pub basis: Basis,
    pub evidence: Evidence,
}

/// Full analysis result for one résumé.
pub struct ResumeAnalysis {
    /// Sorted by KPI id.
    pub assessments: Vec<KpiAssessment>,
    /// Top three KPI ids by score.
    pub strengths: Vec<u8>,
    /// Bottom three KPI ids by score.
    pub weaknesses: Vec<u8>,
}

/// Scores a résumé for one role and assembles the full analysis.
///
/// The scorer is called exactly once; a scorer failure fails the request.
/// Embeddings degrade gracefully: any embedder failure yields a response
/// without embedding fields.
pub async fn analyze_resume(
    scorer: &dyn Scorer,
    embedder: &dyn Embedder,
    resume_text: &str,
    role: Role,
) -> Result<ResumeAnalysis, AppError> {
    let raw_scores = scorer.score(resume_text, role).await?;
    let rubric = role.rubric();

    let mut assessments: Vec<KpiAssessment> = raw_scores
        .into_iter()
        .map(|(kpi_id, raw)| {
            let evidence = match raw.basis {
                Basis::None => Evidence::Absent,
                _ => Evidence::Supported {
                    reason: normalize_reason(raw.reason.as_deref(), MAX_REASON_LEN),
                    embedding: None,
                },
            };
            KpiAssessment {
                kpi_id,
                kpi_name: rubric.kpi_name(kpi_id),
                score: raw.score,
                // Level is a pure function of score; the model's claimed
                // level is not trusted.
                level: Level::from_score(raw.score),
                basis: raw.basis,
                evidence,
            }
        })
        .collect();

    attach_embeddings(embedder, &mut assessments).await;

    let (strengths, weaknesses) = top_bottom_kpis(&assessments);

    Ok(ResumeAnalysis {
        assessments,
        strengths,
        weaknesses,
    })
}

/// Batches every non-empty normalized reason into one embedder call and zips
/// the returned vectors back onto their KPIs by position.
async fn attach_embeddings(embedder: &dyn Embedder, assessments: &mut [KpiAssessment]) {
    let mut batch_ids = Vec::new();
    let mut batch_texts = Vec::new();
    for a in assessments.iter() {
        if let Evidence::Supported {
            reason: Some(reason),
            ..
        } = &a.evidence
        {
            batch_ids.push(a.kpi_id);
            batch_texts.push(reason.clone());
        }
    }
    if batch_texts.is_empty() {
        return;
    }

    let vectors = match embedder.embed(&batch_texts).await {
        Ok(v) => v,
        Err(e) => {
            warn!("embedding batch failed, response degrades to no embeddings: {e}");
            return;
        }
    };

    for (kpi_id, vector) in batch_ids.into_iter().zip(vectors) {
        if let Some(a) = assessments.iter_mut().find(|a| a.kpi_id == kpi_id) {
            if let Evidence::Supported { embedding, .. } = &mut a.evidence {
                *embedding = Some(vector);
            }
        }
    }
}

/// Top three and bottom three KPI ids by score. Ties resolve to the lower id.
fn top_bottom_kpis(assessments: &[KpiAssessment]) -> (Vec<u8>, Vec<u8>) {
    let mut by_score: Vec<(u8, i32)> = assessments.iter().map(|a| (a.kpi_id, a.score)).collect();

    by_score.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    let strengths = by_score.iter().take(3).map(|(id, _)| *id).collect();

    by_score.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
    let weaknesses = by_score.iter().take(3).map(|(id, _)| *id).collect();

    (strengths, weaknesses)
}

/// Survey-based fallback scoring for one role.
pub fn fallback_survey(role: Role, answers: [i32; 5]) -> Vec<FallbackKpiScore> {
    aggregate_survey(role.rubric(), answers)
}
