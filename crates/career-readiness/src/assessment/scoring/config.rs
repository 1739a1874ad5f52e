use serde::{Deserialize, Serialize};

/// Weights and thresholds applied by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Highest Likert index; a response of this value scores 100.
    pub likert_max: u8,
    pub psychometric_weight: f64,
    pub technical_weight: f64,
    pub wiscar_weight: f64,
    pub strong_fit_threshold: u8,
    pub moderate_fit_threshold: u8,
    /// Overall score treated as the most consistent outcome when computing confidence.
    pub consistency_baseline: f64,
    pub completeness_weight: f64,
    pub consistency_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            likert_max: crate::assessment::domain::LIKERT_MAX,
            psychometric_weight: 0.3,
            technical_weight: 0.3,
            wiscar_weight: 0.4,
            strong_fit_threshold: 80,
            moderate_fit_threshold: 60,
            consistency_baseline: 75.0,
            completeness_weight: 60.0,
            consistency_weight: 0.4,
        }
    }
}
