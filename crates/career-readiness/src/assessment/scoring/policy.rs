use super::super::domain::{CareerFit, WiscarScores};
use super::config::ScoringConfig;
use super::rules::round_score;

/// Weighted blend of the three category scores, rounded once.
pub(crate) fn overall_score(
    psychometric: u8,
    technical: u8,
    wiscar: &WiscarScores,
    config: &ScoringConfig,
) -> u8 {
    let blended = f64::from(psychometric) * config.psychometric_weight
        + f64::from(technical) * config.technical_weight
        + wiscar.mean() * config.wiscar_weight;
    round_score(blended)
}

pub(crate) fn career_fit(overall: u8, config: &ScoringConfig) -> CareerFit {
    if overall >= config.strong_fit_threshold {
        CareerFit::Strong
    } else if overall >= config.moderate_fit_threshold {
        CareerFit::Moderate
    } else {
        CareerFit::Low
    }
}

/// Blend of answer completeness (as a 0-1 fraction) and closeness of `overall` to the baseline.
pub(crate) fn confidence(answered: usize, total: usize, overall: u8, config: &ScoringConfig) -> u8 {
    let completeness = if total == 0 {
        0.0
    } else {
        answered as f64 / total as f64
    };
    let consistency = (100.0 - (f64::from(overall) - config.consistency_baseline).abs()).max(0.0);
    round_score(
        completeness * config.completeness_weight + consistency * config.consistency_weight,
    )
}
