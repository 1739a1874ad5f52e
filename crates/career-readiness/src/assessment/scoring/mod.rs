mod config;
mod guidance;
mod policy;
mod rules;

pub use config::ScoringConfig;

use super::bank::QuestionBank;
use super::domain::{Answer, AssessmentResult};
use rules::AnswerLookup;
use std::sync::Arc;
use tracing::debug;

/// Pure evaluator turning an answer list into an [`AssessmentResult`] for one bank.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: Arc<QuestionBank>,
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(bank: Arc<QuestionBank>, config: ScoringConfig) -> Self {
        Self { bank, config }
    }

    /// Engine over the built-in bank with default weights.
    pub fn standard() -> Self {
        Self::new(Arc::new(QuestionBank::standard()), ScoringConfig::default())
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores any answer list; missing, unknown or malformed entries fall back to zero credit.
    pub fn score(&self, answers: &[Answer]) -> AssessmentResult {
        let lookup = AnswerLookup::new(answers);
        let scores = rules::score_categories(&self.bank, &lookup, &self.config);

        let overall = policy::overall_score(
            scores.psychometric,
            scores.technical,
            &scores.wiscar,
            &self.config,
        );
        let fit = policy::career_fit(overall, &self.config);
        let confidence = policy::confidence(
            answers.len(),
            self.bank.total_questions(),
            overall,
            &self.config,
        );

        debug!(
            overall,
            psychometric = scores.psychometric,
            technical = scores.technical,
            fit = fit.label(),
            "answers scored"
        );

        AssessmentResult {
            overall_score: overall,
            psychometric_score: scores.psychometric,
            technical_score: scores.technical,
            wiscar_scores: scores.wiscar,
            career_fit: fit,
            confidence,
            recommendations: guidance::recommendations(
                fit,
                scores.psychometric,
                scores.technical,
                &scores.wiscar,
            ),
            next_steps: guidance::next_steps(fit, scores.technical),
            alternative_careers: guidance::alternative_careers(
                fit,
                scores.psychometric,
                scores.technical,
            ),
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}
