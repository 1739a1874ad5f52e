//! Technical Support Engineer readiness questionnaire: question bank, progression tracker,
//! scoring engine, result reports and the HTTP surface over them.

pub mod archive;
pub mod bank;
pub mod domain;
pub mod report;
pub mod router;
pub mod scoring;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use archive::{
    AnswerArchive, BlobStore, FileBlobStore, MemoryBlobStore, ResultsError, StoreError,
    ANSWERS_KEY,
};
pub use bank::{QuestionBank, QuestionBankError, Section};
pub use domain::{
    Answer, AnswerValue, AssessmentResult, CareerFit, Question, QuestionCategory, QuestionKind,
    WiscarDimension, WiscarScores, LIKERT_LABELS, LIKERT_MAX,
};
pub use report::{ResultReport, ScoreBand, SectionOutline, SessionView};
pub use router::assessment_router;
pub use scoring::{ScoringConfig, ScoringEngine};
pub use service::{
    AnswerOutcome, AnswerSubmission, AssessmentService, BackOutcome, ScoredAssessment,
    ServiceError,
};
pub use session::{Advance, AssessmentSession, Position, ProgressionError, Rewind, SessionState};

/// Scores an answer list against the built-in bank with default weights.
pub fn score(answers: &[Answer]) -> AssessmentResult {
    ScoringEngine::standard().score(answers)
}
