//! Survey-based fallback scoring.
//!
//! Used when a résumé lacks evidence for a role's KPIs: five 1–5 survey
//! answers are aggregated into ten 0–100 scores via the role's fixed weight
//! tables. Pure arithmetic, total over all integer inputs — out-of-range
//! answers fall back to the neutral midpoint instead of failing.

use serde::Serialize;

use crate::kpi::rubric::{RoleRubric, KPI_COUNT};
use crate::kpi::Level;

/// Neutral answer score, used for out-of-range answers and for a KPI with no
/// contributing question.
const NEUTRAL_SCORE: f64 = 50.0;

/// Maps a 1–5 survey answer onto the 0–100 scale.
pub fn answer_score(answer: i32) -> f64 {
    match answer {
        1 => 0.0,
        2 => 25.0,
        3 => 50.0,
        4 => 75.0,
        5 => 100.0,
        _ => NEUTRAL_SCORE,
    }
}

/// One KPI score computed from the survey.
#[derive(Debug, Clone, Serialize)]
pub struct FallbackKpiScore {
    pub kpi_id: u8,
    pub kpi_name: String,
    pub score: i32,
    pub level: Level,
    /// Always "fallback" — distinguishes survey-derived scores from
    /// model-produced ones.
    pub source: &'static str,
}

/// Aggregates five survey answers into scores for all ten KPIs of `rubric`.
///
/// Each KPI's score is the weighted mean of its contributing
/// (answer-score, weight) pairs across the five question tables, rounded to
/// the nearest integer and clamped into [0, 100]. Always returns exactly ten
/// entries, in KPI id order.
pub fn aggregate_survey(rubric: &RoleRubric, answers: [i32; 5]) -> Vec<FallbackKpiScore> {
    let answer_scores = answers.map(answer_score);

    (1..=KPI_COUNT)
        .map(|kpi_id| {
            let mut weighted_sum = 0.0;
            let mut total_weight = 0.0;
            for (question, score) in rubric.questions.iter().zip(answer_scores) {
                for &(id, weight) in question.weights {
                    if id == kpi_id {
                        weighted_sum += score * weight;
                        total_weight += weight;
                    }
                }
            }

            let raw = if total_weight > 0.0 {
                (weighted_sum / total_weight).round()
            } else {
                // No contributing question; the shipped rubrics never hit
                // this, but it must not panic.
                NEUTRAL_SCORE
            };
            // Invariant: final score always lands in [0, 100].
            let score = (raw as i32).clamp(0, 100);

            FallbackKpiScore {
                kpi_id,
                kpi_name: rubric.kpi_name(kpi_id),
                score,
                level: Level::from_score(score),
                source: "fallback",
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kpi::role::Role;
    use crate::kpi::rubric::QuestionWeights;

    #[test]
    fn test_answer_score_mapping() {
        assert_eq!(answer_score(1), 0.0);
        assert_eq!(answer_score(2), 25.0);
        assert_eq!(answer_score(3), 50.0);
        assert_eq!(answer_score(4), 75.0);
        assert_eq!(answer_score(5), 100.0);
    }

    #[test]
    fn test_out_of_range_answers_are_neutral() {
        assert_eq!(answer_score(0), 50.0);
        assert_eq!(answer_score(6), 50.0);
        assert_eq!(answer_score(-3), 50.0);
        assert_eq!(answer_score(i32::MAX), 50.0);
    }

    #[test]
    fn test_always_ten_entries_in_id_order() {
        for role in Role::ALL {
            let scores = aggregate_survey(role.rubric(), [1, 2, 3, 4, 5]);
            assert_eq!(scores.len(), 10);
            let ids: Vec<u8> = scores.iter().map(|s| s.kpi_id).collect();
            assert_eq!(ids, (1..=10).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn test_scores_in_range_with_consistent_levels() {
        let combos = [
            [1, 1, 1, 1, 1],
            [5, 5, 5, 5, 5],
            [1, 5, 1, 5, 1],
            [2, 4, 3, 2, 4],
            [0, 6, -1, 99, 3],
        ];
        for role in Role::ALL {
            for answers in combos {
                for entry in aggregate_survey(role.rubric(), answers) {
                    assert!((0..=100).contains(&entry.score));
                    assert_eq!(entry.level, Level::from_score(entry.score));
                    assert_eq!(entry.source, "fallback");
                }
            }
        }
    }

    #[test]
    fn test_all_ones_scores_zero_everywhere() {
        for role in Role::ALL {
            for entry in aggregate_survey(role.rubric(), [1; 5]) {
                assert_eq!(entry.score, 0, "{:?} KPI {}", role, entry.kpi_id);
                assert_eq!(entry.level, Level::Low);
            }
        }
    }

    #[test]
    fn test_all_fives_scores_hundred_everywhere() {
        for role in Role::ALL {
            for entry in aggregate_survey(role.rubric(), [5; 5]) {
                assert_eq!(entry.score, 100, "{:?} KPI {}", role, entry.kpi_id);
                assert_eq!(entry.level, Level::High);
            }
        }
    }

    #[test]
    fn test_midpoint_answers_score_fifty() {
        // A weighted mean of a constant equals the constant.
        for entry in aggregate_survey(Role::Backend.rubric(), [3; 5]) {
            assert_eq!(entry.score, 50);
            assert_eq!(entry.level, Level::Mid);
        }
    }

    #[test]
    fn test_out_of_range_answer_behaves_like_midpoint() {
        let rubric = Role::Backend.rubric();
        let with_zero = aggregate_survey(rubric, [0, 4, 5, 2, 4]);
        let with_six = aggregate_survey(rubric, [6, 4, 5, 2, 4]);
        let with_three = aggregate_survey(rubric, [3, 4, 5, 2, 4]);
        for (a, b) in with_zero.iter().zip(&with_three) {
            assert_eq!(a.score, b.score);
        }
        for (a, b) in with_six.iter().zip(&with_three) {
            assert_eq!(a.score, b.score);
        }
    }

    #[test]
    fn test_kpi_without_contributions_defaults_to_neutral() {
        // Synthetic rubric leaving KPI 10 without any contributing question.
        static SPARSE: RoleRubric = RoleRubric {
            names: [
                "A", "B", "C", "D", "E", "F", "G", "H", "I", "J",
            ],
            questions: [
                QuestionWeights { label: "q1", weights: &[(1, 1.0)] },
                QuestionWeights { label: "q2", weights: &[(2, 0.5), (3, 0.5)] },
                QuestionWeights { label: "q3", weights: &[(4, 0.6), (5, 0.4)] },
                QuestionWeights { label: "q4", weights: &[(6, 0.7), (7, 0.3)] },
                QuestionWeights { label: "q5", weights: &[(8, 0.8), (9, 0.2)] },
            ],
        };

        let scores = aggregate_survey(&SPARSE, [5; 5]);
        assert_eq!(scores[9].kpi_id, 10);
        assert_eq!(scores[9].score, 50);
        assert_eq!(scores[9].level, Level::Mid);
        // Covered KPIs still track the answers.
        assert_eq!(scores[0].score, 100);
    }

    #[test]
    fn test_backend_known_answers_exact_scores() {
        // Hand-derived from the backend weight tables with answers
        // (4, 3, 5, 2, 4) → answer scores (75, 50, 100, 25, 75).
        let scores = aggregate_survey(Role::Backend.rubric(), [4, 3, 5, 2, 4]);
        let expected: [(u8, i32); 10] = [
            (1, 25),  // 25*0.15 / 0.15
            (2, 43),  // (50*0.35 + 25*0.15) / 0.50 = 42.5, rounds away from zero
            (3, 57),  // (50*0.25 + 75*0.10) / 0.35
            (4, 65),  // (75*0.10 + 50*0.20 + 75*0.20) / 0.50
            (5, 100), // 100*0.45 / 0.45
            (6, 75),  // (75*0.25 + 75*0.30) / 0.55
            (7, 100), // 100*0.15 / 0.15
            (8, 53),  // (100*0.15 + 25*0.45 + 75*0.25) / 0.85
            (9, 53),  // (75*0.20 + 50*0.20 + 25*0.25 + 75*0.15) / 0.80
            (10, 84), // (75*0.45 + 100*0.25) / 0.70
        ];
        for ((kpi_id, score), entry) in expected.iter().zip(&scores) {
            assert_eq!(entry.kpi_id, *kpi_id);
            assert_eq!(entry.score, *score, "KPI {kpi_id}");
        }
    }
}
