use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agreement scale shared by every Likert question, indexed 0..=4.
pub const LIKERT_LABELS: [&str; 5] = [
    "Strongly Disagree",
    "Disagree",
    "Neutral",
    "Agree",
    "Strongly Agree",
];

/// Highest Likert index.
pub const LIKERT_MAX: u8 = (LIKERT_LABELS.len() - 1) as u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Psychometric,
    Technical,
    Aptitude,
    Wiscar,
}

impl QuestionCategory {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Psychometric,
            Self::Technical,
            Self::Aptitude,
            Self::Wiscar,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Psychometric => "psychometric",
            Self::Technical => "technical",
            Self::Aptitude => "aptitude",
            Self::Wiscar => "wiscar",
        }
    }

    pub const fn section_name(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychometric Assessment",
            Self::Technical => "Technical Knowledge",
            Self::Aptitude => "Aptitude & Problem Solving",
            Self::Wiscar => "WISCAR Framework",
        }
    }

    pub const fn section_description(self) -> &'static str {
        match self {
            Self::Psychometric => "We'll evaluate your personality traits, interests, and motivations that align with technical support roles.",
            Self::Technical => "Test your current understanding of basic technical concepts and troubleshooting approaches.",
            Self::Aptitude => "Assess your logical reasoning and approach to common technical support scenarios.",
            Self::Wiscar => "Evaluate your readiness across six key dimensions for technical support success.",
        }
    }

    /// Categories whose questions are graded against an answer key.
    pub const fn is_graded(self) -> bool {
        matches!(self, Self::Technical | Self::Aptitude)
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.key().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Likert,
    MultipleChoice,
    YesNo,
}

impl QuestionKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Likert => "likert",
            Self::MultipleChoice => "multiple_choice",
            Self::YesNo => "yes_no",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "likert" => Some(Self::Likert),
            "multiple_choice" | "multiple-choice" => Some(Self::MultipleChoice),
            "yes_no" | "yes-no" => Some(Self::YesNo),
            _ => None,
        }
    }
}

/// The six WISCAR readiness dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    /// Subcategory tag used by the question bank.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::Interest => "interest",
            Self::Skill => "skill",
            Self::Cognitive => "cognitive",
            Self::Ability => "ability",
            Self::RealWorld => "realWorld",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive",
            Self::Ability => "Ability",
            Self::RealWorld => "Real-World Fit",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|dimension| dimension.key() == value.trim())
    }
}

/// Static question definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub kind: QuestionKind,
    pub category: QuestionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construct: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Correct option literal for graded categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<String>,
}

impl Question {
    /// Selectable labels in display order; Likert questions use the shared scale.
    pub fn choices(&self) -> Vec<&str> {
        match self.kind {
            QuestionKind::Likert => LIKERT_LABELS.to_vec(),
            QuestionKind::MultipleChoice | QuestionKind::YesNo => {
                self.options.iter().map(String::as_str).collect()
            }
        }
    }

    /// Converts a zero-based choice position into the stored answer value.
    pub fn value_for_choice(&self, index: usize) -> Option<AnswerValue> {
        match self.kind {
            QuestionKind::Likert => u8::try_from(index)
                .ok()
                .filter(|value| *value <= LIKERT_MAX)
                .map(AnswerValue::Likert),
            QuestionKind::MultipleChoice | QuestionKind::YesNo => self
                .options
                .get(index)
                .map(|option| AnswerValue::Choice(option.clone())),
        }
    }

    pub fn wiscar_dimension(&self) -> Option<WiscarDimension> {
        if self.category != QuestionCategory::Wiscar {
            return None;
        }
        self.subcategory.as_deref().and_then(WiscarDimension::from_key)
    }
}

/// Raw answer payload: a Likert index or a literal option.
///
/// Any other JSON value (fractions, negatives, `null`, booleans) is kept as
/// [`AnswerValue::Unrecognized`] so one bad item never rejects the whole list; it scores 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Likert(u8),
    Choice(String),
    Unrecognized(serde_json::Value),
}

impl AnswerValue {
    pub fn as_likert(&self) -> Option<u8> {
        match self {
            AnswerValue::Likert(value) => Some(*value),
            AnswerValue::Choice(_) | AnswerValue::Unrecognized(_) => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            AnswerValue::Choice(value) => Some(value),
            AnswerValue::Likert(_) | AnswerValue::Unrecognized(_) => None,
        }
    }

    pub fn is_unrecognized(&self) -> bool {
        matches!(self, AnswerValue::Unrecognized(_))
    }

    pub fn is_empty_selection(&self) -> bool {
        matches!(self, AnswerValue::Choice(value) if value.trim().is_empty())
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Likert(value) => match LIKERT_LABELS.get(*value as usize) {
                Some(label) => write!(f, "{label}"),
                None => write!(f, "{value}"),
            },
            AnswerValue::Choice(value) => write!(f, "{value}"),
            AnswerValue::Unrecognized(value) => write!(f, "{value}"),
        }
    }
}

/// A single recorded response, serialized as `{questionId, value, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    pub timestamp: DateTime<Utc>,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self::at(question_id, value, Utc::now())
    }

    pub fn at(
        question_id: impl Into<String>,
        value: AnswerValue,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            value,
            timestamp,
        }
    }

    pub fn likert(question_id: impl Into<String>, value: u8) -> Self {
        Self::new(question_id, AnswerValue::Likert(value))
    }

    pub fn choice(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(question_id, AnswerValue::Choice(value.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerFit {
    Strong,
    Moderate,
    Low,
}

impl CareerFit {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "Strong Match",
            Self::Moderate => "Moderate Match",
            Self::Low => "Limited Match",
        }
    }
}

/// Per-dimension WISCAR profile, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub(crate) fn set(&mut self, dimension: WiscarDimension, score: u8) {
        let slot = match dimension {
            WiscarDimension::Will => &mut self.will,
            WiscarDimension::Interest => &mut self.interest,
            WiscarDimension::Skill => &mut self.skill,
            WiscarDimension::Cognitive => &mut self.cognitive,
            WiscarDimension::Ability => &mut self.ability,
            WiscarDimension::RealWorld => &mut self.real_world,
        };
        *slot = score;
    }

    pub fn mean(&self) -> f64 {
        let total: f64 = WiscarDimension::ordered()
            .into_iter()
            .map(|dimension| f64::from(self.get(dimension)))
            .sum();
        total / WiscarDimension::ordered().len() as f64
    }
}

/// Immutable scoring output for one completed answer set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub overall_score: u8,
    pub psychometric_score: u8,
    pub technical_score: u8,
    pub wiscar_scores: WiscarScores,
    pub career_fit: CareerFit,
    pub confidence: u8,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    pub alternative_careers: Vec<String>,
}
