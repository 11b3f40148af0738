// KPI evaluation domain.
// Two scoring paths: LLM analysis of résumé text and survey-based fallback.
// All LLM calls go through llm_client — no direct Anthropic SDK calls here.

pub mod fallback;
pub mod handlers;
pub mod normalize;
pub mod prompts;
pub mod role;
pub mod rubric;
pub mod scorer;
pub mod service;

use serde::{Deserialize, Serialize};

/// Score band for a 0–100 KPI score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Mid,
    Low,
}

impl Level {
    /// ≥75 high, 50–74 mid, otherwise low.
    pub fn from_score(score: i32) -> Self {
        if score >= 75 {
            Level::High
        } else if score >= 50 {
            Level::Mid
        } else {
            Level::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(Level::from_score(100), Level::High);
        assert_eq!(Level::from_score(75), Level::High);
        assert_eq!(Level::from_score(74), Level::Mid);
        assert_eq!(Level::from_score(50), Level::Mid);
        assert_eq!(Level::from_score(49), Level::Low);
        assert_eq!(Level::from_score(0), Level::Low);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Level::High).unwrap(), r#""high""#);
        assert_eq!(serde_json::to_string(&Level::Mid).unwrap(), r#""mid""#);
        assert_eq!(serde_json::to_string(&Level::Low).unwrap(), r#""low""#);
    }
}
