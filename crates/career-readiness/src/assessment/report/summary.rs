use super::super::bank::QuestionBank;
use super::super::domain::{
    AssessmentResult, CareerFit, Question, QuestionCategory, QuestionKind, WiscarDimension,
    LIKERT_LABELS,
};
use super::super::session::AssessmentSession;
use super::views::{CardVariant, ScoreBand, ScoreCard, WiscarEntry};
use serde::Serialize;
use std::fmt::Write;

const PSYCHOMETRIC_TITLE: &str = "Psychometric Fit";
const PSYCHOMETRIC_DESCRIPTION: &str =
    "Your personality traits, interests, and motivations align with technical support roles.";
const TECHNICAL_TITLE: &str = "Technical Readiness";
const TECHNICAL_DESCRIPTION: &str =
    "Your current technical knowledge and problem-solving capabilities.";

/// Presentation-ready view of an [`AssessmentResult`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultReport {
    pub overall_score: u8,
    pub career_fit: CareerFit,
    pub career_fit_label: &'static str,
    pub confidence: u8,
    pub cards: Vec<ScoreCard>,
    pub wiscar: Vec<WiscarEntry>,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alternative_careers: Vec<String>,
}

impl ResultReport {
    pub fn from_result(result: &AssessmentResult) -> Self {
        let cards = vec![
            ScoreCard::new(
                PSYCHOMETRIC_TITLE,
                PSYCHOMETRIC_DESCRIPTION,
                result.psychometric_score,
                CardVariant::Primary,
            ),
            ScoreCard::new(
                TECHNICAL_TITLE,
                TECHNICAL_DESCRIPTION,
                result.technical_score,
                CardVariant::for_technical(result.technical_score),
            ),
        ];

        let wiscar = WiscarDimension::ordered()
            .into_iter()
            .map(|dimension| {
                let score = result.wiscar_scores.get(dimension);
                WiscarEntry {
                    dimension,
                    label: dimension.label(),
                    score,
                    band: ScoreBand::from_score(score),
                }
            })
            .collect();

        Self {
            overall_score: result.overall_score,
            career_fit: result.career_fit,
            career_fit_label: result.career_fit.label(),
            confidence: result.confidence,
            cards,
            wiscar,
            recommendations: result.recommendations.clone(),
            next_steps: result.next_steps.clone(),
            alternative_careers: result.alternative_careers.clone(),
        }
    }

    /// Plain-text summary for copying or printing to a terminal.
    pub fn share_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "Technical Support Engineer Career Readiness");
        let _ = writeln!(
            text,
            "Overall: {}/100 ({}, {}% confidence)",
            self.overall_score, self.career_fit_label, self.confidence
        );

        for card in &self.cards {
            let _ = writeln!(text, "{}: {}/100 ({})", card.title, card.score, card.band_label);
        }

        let _ = writeln!(text, "\nWISCAR");
        for entry in &self.wiscar {
            let _ = writeln!(text, "  {:<16}{:>3}", entry.label, entry.score);
        }

        write_list(&mut text, "Key Insights", &self.recommendations, false);
        write_list(&mut text, "Next Steps", &self.next_steps, true);
        if !self.alternative_careers.is_empty() {
            write_list(&mut text, "Alternative Career Paths", &self.alternative_careers, false);
        }

        text
    }
}

fn write_list(text: &mut String, heading: &str, items: &[String], numbered: bool) {
    let _ = writeln!(text, "\n{heading}");
    for (index, item) in items.iter().enumerate() {
        if numbered {
            let _ = writeln!(text, "  {}. {item}", index + 1);
        } else {
            let _ = writeln!(text, "  - {item}");
        }
    }
}

/// Displayed question without its answer key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub choices: Vec<String>,
    /// Index into `choices` of the previously recorded answer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<usize>,
}

impl QuestionView {
    pub fn new(question: &Question, selected: Option<usize>) -> Self {
        Self {
            id: question.id.clone(),
            text: question.text.clone(),
            kind: question.kind,
            choices: question.choices().into_iter().map(str::to_string).collect(),
            selected,
        }
    }
}

/// Public outline of one bank section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionOutline {
    pub category: QuestionCategory,
    pub name: String,
    pub description: String,
    pub questions: Vec<QuestionView>,
}

impl SectionOutline {
    pub fn from_bank(bank: &QuestionBank) -> Vec<Self> {
        bank.sections()
            .iter()
            .map(|section| Self {
                category: section.category,
                name: section.name.clone(),
                description: section.description.clone(),
                questions: section
                    .questions
                    .iter()
                    .map(|question| QuestionView::new(question, None))
                    .collect(),
            })
            .collect()
    }
}

/// Snapshot of an in-progress session for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub section_name: String,
    pub section_description: String,
    pub section_number: usize,
    pub section_count: usize,
    pub question_number: usize,
    pub section_question_count: usize,
    pub answered: usize,
    pub total_questions: usize,
    pub progress_pct: f32,
    pub section_completion: Vec<bool>,
    pub question: QuestionView,
}

impl SessionView {
    /// `None` once the session has reached its terminal state.
    pub fn from_session(session: &AssessmentSession) -> Option<Self> {
        let section = session.current_section()?;
        let question = session.current_question()?;
        let position = session.position();

        let choices = question.choices();
        let selected = session.current_answer().and_then(|answer| match question.kind {
            QuestionKind::Likert => answer
                .value
                .as_likert()
                .map(usize::from)
                .filter(|index| *index < LIKERT_LABELS.len()),
            QuestionKind::MultipleChoice | QuestionKind::YesNo => answer
                .value
                .as_choice()
                .and_then(|value| choices.iter().position(|choice| *choice == value)),
        });

        Some(Self {
            section_name: section.name.clone(),
            section_description: section.description.clone(),
            section_number: position.section_index + 1,
            section_count: session.bank().section_count(),
            question_number: position.question_index + 1,
            section_question_count: section.len(),
            answered: session.answers().len(),
            total_questions: session.bank().total_questions(),
            progress_pct: session.overall_progress(),
            section_completion: session.state().section_completion.clone(),
            question: QuestionView::new(question, selected),
        })
    }

    pub fn section_caption(&self) -> String {
        format!("Section {} of {}", self.section_number, self.section_count)
    }

    pub fn question_caption(&self) -> String {
        format!(
            "Question {} of {} in this section",
            self.question_number, self.section_question_count
        )
    }
}
