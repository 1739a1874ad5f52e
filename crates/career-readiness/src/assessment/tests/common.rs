use std::io;
use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessment::archive::{BlobStore, MemoryBlobStore, StoreError};
use crate::assessment::bank::QuestionBank;
use crate::assessment::domain::{Answer, Question, QuestionKind};
use crate::assessment::scoring::{ScoringConfig, ScoringEngine};
use crate::assessment::service::{AnswerSubmission, AssessmentService};
use crate::assessment::session::AssessmentSession;

pub(super) fn standard_bank() -> Arc<QuestionBank> {
    Arc::new(QuestionBank::standard())
}

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::new(standard_bank(), ScoringConfig::default())
}

pub(super) fn session() -> AssessmentSession {
    AssessmentSession::new(standard_bank())
}

pub(super) fn memory_service() -> AssessmentService<MemoryBlobStore> {
    AssessmentService::new(
        standard_bank(),
        ScoringConfig::default(),
        MemoryBlobStore::default(),
    )
}

/// Answer for `question`: Likert questions take `likert`, graded ones the key or a distractor.
pub(super) fn answer_for(question: &Question, likert: u8, correct: bool) -> Answer {
    match question.kind {
        QuestionKind::Likert => Answer::likert(&question.id, likert),
        QuestionKind::MultipleChoice | QuestionKind::YesNo => {
            let key = question.answer_key.clone().unwrap_or_default();
            let choice = if correct {
                key
            } else {
                question
                    .options
                    .iter()
                    .find(|option| **option != key)
                    .cloned()
                    .unwrap_or_default()
            };
            Answer::choice(&question.id, choice)
        }
    }
}

/// One answer per bank question, in bank order.
pub(super) fn uniform_answers(bank: &QuestionBank, likert: u8, correct: bool) -> Vec<Answer> {
    bank.questions()
        .map(|question| answer_for(question, likert, correct))
        .collect()
}

pub(super) fn submission_for(question: &Question, likert: u8, correct: bool) -> AnswerSubmission {
    let answer = answer_for(question, likert, correct);
    AnswerSubmission {
        question_id: answer.question_id,
        value: answer.value,
    }
}

/// Store whose every operation fails, for exercising error paths.
pub(super) struct UnavailableStore;

impl BlobStore for UnavailableStore {
    fn read(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(offline())
    }

    fn write(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(offline())
    }

    fn remove(&self, _key: &str) -> Result<(), StoreError> {
        Err(offline())
    }
}

fn offline() -> StoreError {
    StoreError::Io(io::Error::new(io::ErrorKind::Other, "disk offline"))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
