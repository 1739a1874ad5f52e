use super::super::bank::QuestionBank;
use super::super::domain::{Answer, QuestionCategory, WiscarScores};
use super::config::ScoringConfig;
use std::collections::{HashMap, HashSet};

/// Answers keyed by question id; a later answer for the same id replaces an earlier one.
pub(crate) struct AnswerLookup<'a> {
    by_question: HashMap<&'a str, &'a Answer>,
}

impl<'a> AnswerLookup<'a> {
    pub fn new(answers: &'a [Answer]) -> Self {
        let by_question = answers
            .iter()
            .map(|answer| (answer.question_id.as_str(), answer))
            .collect();
        Self { by_question }
    }

    fn get(&self, question_id: &str) -> Option<&'a Answer> {
        self.by_question.get(question_id).copied()
    }

    /// Likert response as a 0-100 percentage; off-scale or literal answers yield `None`.
    fn likert_percent(&self, question_id: &str, config: &ScoringConfig) -> Option<f64> {
        let value = self.get(question_id)?.value.as_likert()?;
        if config.likert_max == 0 || value > config.likert_max {
            return None;
        }
        Some(f64::from(value) / f64::from(config.likert_max) * 100.0)
    }
}

pub(crate) struct CategoryScores {
    pub psychometric: u8,
    pub technical: u8,
    pub wiscar: WiscarScores,
}

pub(crate) fn score_categories(
    bank: &QuestionBank,
    lookup: &AnswerLookup<'_>,
    config: &ScoringConfig,
) -> CategoryScores {
    CategoryScores {
        psychometric: psychometric_score(bank, lookup, config),
        technical: technical_score(bank, lookup),
        wiscar: wiscar_scores(bank, lookup, config),
    }
}

fn psychometric_score(
    bank: &QuestionBank,
    lookup: &AnswerLookup<'_>,
    config: &ScoringConfig,
) -> u8 {
    let percents: Vec<f64> = bank
        .questions_in(QuestionCategory::Psychometric)
        .map(|question| lookup.likert_percent(&question.id, config).unwrap_or(0.0))
        .collect();

    if percents.is_empty() {
        return 0;
    }
    round_score(percents.iter().sum::<f64>() / percents.len() as f64)
}

fn technical_score(bank: &QuestionBank, lookup: &AnswerLookup<'_>) -> u8 {
    let mut graded = 0usize;
    let mut correct = 0usize;

    for question in bank.graded_questions() {
        graded += 1;
        let selected = lookup
            .get(&question.id)
            .and_then(|answer| answer.value.as_choice());
        if selected.is_some() && selected == question.answer_key.as_deref() {
            correct += 1;
        }
    }

    if graded == 0 {
        return 0;
    }
    round_score(correct as f64 / graded as f64 * 100.0)
}

/// Each dimension takes the first answered question tagged with it, in bank order.
fn wiscar_scores(
    bank: &QuestionBank,
    lookup: &AnswerLookup<'_>,
    config: &ScoringConfig,
) -> WiscarScores {
    let mut scores = WiscarScores::default();
    let mut filled = HashSet::new();

    for question in bank.questions_in(QuestionCategory::Wiscar) {
        let Some(dimension) = question.wiscar_dimension() else {
            continue;
        };
        if filled.contains(&dimension) {
            continue;
        }
        if let Some(percent) = lookup.likert_percent(&question.id, config) {
            scores.set(dimension, round_score(percent));
            filled.insert(dimension);
        }
    }

    scores
}

/// Rounds half away from zero, saturating into `u8`.
pub(crate) fn round_score(value: f64) -> u8 {
    value.round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::domain::WiscarDimension;

    fn score(bank: &QuestionBank, answers: &[Answer]) -> CategoryScores {
        score_categories(bank, &AnswerLookup::new(answers), &ScoringConfig::default())
    }

    #[test]
    fn later_answers_replace_earlier_ones_in_lookup() {
        let answers = vec![Answer::likert("psych_1", 1), Answer::likert("psych_1", 4)];
        let lookup = AnswerLookup::new(&answers);

        assert_eq!(
            lookup.likert_percent("psych_1", &ScoringConfig::default()),
            Some(100.0)
        );
    }

    #[test]
    fn off_scale_and_literal_values_are_not_numeric() {
        let answers = vec![
            Answer::likert("psych_1", 7),
            Answer::choice("psych_2", "Agree"),
        ];
        let lookup = AnswerLookup::new(&answers);
        let config = ScoringConfig::default();

        assert_eq!(lookup.likert_percent("psych_1", &config), None);
        assert_eq!(lookup.likert_percent("psych_2", &config), None);
    }

    #[test]
    fn psychometric_mean_counts_missing_answers_as_zero() {
        let bank = QuestionBank::standard();
        let answers = vec![Answer::likert("psych_1", 4), Answer::likert("psych_2", 2)];

        let scores = score(&bank, &answers);

        // (100 + 50) / 7 = 21.43
        assert_eq!(scores.psychometric, 21);
    }

    #[test]
    fn wiscar_dimension_uses_only_the_first_answered_question() {
        let mut sections = QuestionBank::standard().sections().to_vec();
        let wiscar = sections
            .iter_mut()
            .find(|section| section.category == QuestionCategory::Wiscar)
            .expect("wiscar section");
        let mut extra = wiscar.questions[0].clone();
        extra.id = "wiscar_7".to_string();
        wiscar.questions.push(extra);
        let bank = QuestionBank::from_sections(sections).expect("valid bank");

        let answers = vec![Answer::likert("wiscar_7", 4), Answer::likert("wiscar_1", 1)];
        let scores = score(&bank, &answers);

        assert_eq!(scores.wiscar.get(WiscarDimension::Will), 25);

        let answers = vec![Answer::likert("wiscar_7", 4)];
        let scores = score(&bank, &answers);

        assert_eq!(scores.wiscar.get(WiscarDimension::Will), 100);
    }

    #[test]
    fn rounding_matches_half_up_for_positive_scores() {
        assert_eq!(round_score(62.5), 63);
        assert_eq!(round_score(62.49), 62);
        assert_eq!(round_score(0.0), 0);
    }
}
