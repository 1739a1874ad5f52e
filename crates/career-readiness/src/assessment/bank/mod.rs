mod loader;
mod standard;

use super::domain::{Question, QuestionCategory, QuestionKind};
use serde::Serialize;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

/// One questionnaire section; every question in it shares the section's category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub category: QuestionCategory,
    pub name: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn new(category: QuestionCategory, questions: Vec<Question>) -> Self {
        Self {
            category,
            name: category.section_name().to_string(),
            description: category.section_description().to_string(),
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}

/// Validated, ordered set of sections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionBank {
    sections: Vec<Section>,
}

impl QuestionBank {
    /// The Technical Support Engineer bank shipped with the crate.
    pub fn standard() -> Self {
        Self {
            sections: standard::standard_sections(),
        }
    }

    /// Builds a bank after checking ids, section coverage and answer keys.
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, QuestionBankError> {
        validate(&sections)?;
        Ok(Self { sections })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, QuestionBankError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionBankError> {
        let questions = loader::parse_questions(reader)?;
        let sections = QuestionCategory::ordered()
            .into_iter()
            .map(|category| {
                let questions = questions
                    .iter()
                    .filter(|question| question.category == category)
                    .cloned()
                    .collect();
                Section::new(category, questions)
            })
            .collect();

        Self::from_sections(sections)
    }

    /// Writes the bank in the same CSV layout [`QuestionBank::from_reader`] accepts.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), QuestionBankError> {
        loader::write_questions(writer, self.questions())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
    }

    pub fn questions_in(&self, category: QuestionCategory) -> impl Iterator<Item = &Question> + '_ {
        self.questions()
            .filter(move |question| question.category == category)
    }

    /// Technical then aptitude questions, in bank order.
    pub fn graded_questions(&self) -> impl Iterator<Item = &Question> + '_ {
        QuestionCategory::ordered()
            .into_iter()
            .filter(|category| category.is_graded())
            .flat_map(move |category| self.questions_in(category))
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions().find(|question| question.id == id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionBankError {
    #[error("failed to read question bank: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid question bank CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("question {id} has unknown category '{value}'")]
    UnknownCategory { id: String, value: String },
    #[error("question {id} has unknown kind '{value}'")]
    UnknownKind { id: String, value: String },
    #[error("question id {0} appears more than once")]
    DuplicateId(String),
    #[error("section for category {} has no questions", .0.key())]
    EmptySection(QuestionCategory),
    #[error("question {id} is filed under section {section} but belongs to {}", .category.key())]
    MisplacedQuestion {
        id: String,
        section: String,
        category: QuestionCategory,
    },
    #[error("choice question {0} defines no options")]
    MissingOptions(String),
    #[error("graded question {0} has no answer key")]
    MissingAnswerKey(String),
    #[error("answer key '{key}' for question {id} is not one of its options")]
    AnswerKeyNotInOptions { id: String, key: String },
    #[error("WISCAR question {id} has unknown dimension '{value}'")]
    UnknownDimension { id: String, value: String },
}

fn validate(sections: &[Section]) -> Result<(), QuestionBankError> {
    for category in QuestionCategory::ordered() {
        let populated = sections
            .iter()
            .any(|section| section.category == category && !section.is_empty());
        if !populated {
            return Err(QuestionBankError::EmptySection(category));
        }
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for section in sections {
        if section.is_empty() {
            return Err(QuestionBankError::EmptySection(section.category));
        }

        for question in &section.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(QuestionBankError::DuplicateId(question.id.clone()));
            }

            if question.category != section.category {
                return Err(QuestionBankError::MisplacedQuestion {
                    id: question.id.clone(),
                    section: section.name.clone(),
                    category: question.category,
                });
            }

            validate_question(question)?;
        }
    }

    Ok(())
}

fn validate_question(question: &Question) -> Result<(), QuestionBankError> {
    if question.kind != QuestionKind::Likert && question.options.is_empty() {
        return Err(QuestionBankError::MissingOptions(question.id.clone()));
    }

    if question.category.is_graded() {
        let key = question
            .answer_key
            .as_deref()
            .ok_or_else(|| QuestionBankError::MissingAnswerKey(question.id.clone()))?;
        if !question.options.iter().any(|option| option == key) {
            return Err(QuestionBankError::AnswerKeyNotInOptions {
                id: question.id.clone(),
                key: key.to_string(),
            });
        }
    }

    if question.category == QuestionCategory::Wiscar && question.wiscar_dimension().is_none() {
        return Err(QuestionBankError::UnknownDimension {
            id: question.id.clone(),
            value: question.subcategory.clone().unwrap_or_default(),
        });
    }

    Ok(())
}
