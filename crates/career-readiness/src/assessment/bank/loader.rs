use super::QuestionBankError;
use crate::assessment::domain::{Question, QuestionCategory, QuestionKind};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::{Read, Write};

const OPTION_SEPARATOR: &str = "|";

#[derive(Debug, Deserialize, Serialize)]
struct BankRow {
    id: String,
    category: String,
    kind: String,
    text: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    subcategory: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    construct: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    options: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

impl BankRow {
    fn into_question(self) -> Result<Question, QuestionBankError> {
        let category = QuestionCategory::parse(&self.category).ok_or_else(|| {
            QuestionBankError::UnknownCategory {
                id: self.id.clone(),
                value: self.category.clone(),
            }
        })?;
        let kind = QuestionKind::parse(&self.kind).ok_or_else(|| QuestionBankError::UnknownKind {
            id: self.id.clone(),
            value: self.kind.clone(),
        })?;

        let options = self
            .options
            .as_deref()
            .map(split_options)
            .unwrap_or_default();

        Ok(Question {
            id: normalize_text(&self.id),
            text: normalize_text(&self.text),
            kind,
            category,
            subcategory: self.subcategory,
            construct: self.construct,
            options,
            answer_key: self.answer,
        })
    }

    fn from_question(question: &Question) -> Self {
        let options = if question.options.is_empty() {
            None
        } else {
            Some(question.options.join(OPTION_SEPARATOR))
        };

        Self {
            id: question.id.clone(),
            category: question.category.key().to_string(),
            kind: question.kind.key().to_string(),
            text: question.text.clone(),
            subcategory: question.subcategory.clone(),
            construct: question.construct.clone(),
            options,
            answer: question.answer_key.clone(),
        }
    }
}

pub(super) fn parse_questions<R: Read>(reader: R) -> Result<Vec<Question>, QuestionBankError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut questions = Vec::new();

    for record in csv_reader.deserialize::<BankRow>() {
        let row = record?;
        questions.push(row.into_question()?);
    }

    Ok(questions)
}

pub(super) fn write_questions<'a, W, I>(writer: W, questions: I) -> Result<(), QuestionBankError>
where
    W: Write,
    I: IntoIterator<Item = &'a Question>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    for question in questions {
        csv_writer.serialize(BankRow::from_question(question))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn split_options(raw: &str) -> Vec<String> {
    raw.split(OPTION_SEPARATOR)
        .map(normalize_text)
        .filter(|option| !option.is_empty())
        .collect()
}

/// Strips byte-order marks and collapses internal whitespace.
fn normalize_text(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .map(|value| normalize_text(&value))
        .filter(|value| !value.is_empty()))
}
