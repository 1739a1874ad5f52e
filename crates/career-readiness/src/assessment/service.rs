use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::archive::{AnswerArchive, BlobStore, ResultsError};
use super::bank::QuestionBank;
use super::domain::{Answer, AnswerValue, AssessmentResult};
use super::report::{ResultReport, SectionOutline, SessionView};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::session::{Advance, AssessmentSession, ProgressionError, Rewind};

/// Answer payload accepted from clients; the timestamp is assigned on receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSubmission {
    pub question_id: String,
    pub value: AnswerValue,
}

/// Scored answer set alongside its presentation view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredAssessment {
    pub result: AssessmentResult,
    pub report: ResultReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerOutcome {
    InProgress { session: SessionView },
    Complete { assessment: ScoredAssessment },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BackOutcome {
    InProgress { session: SessionView },
    Exited,
}

/// Service composing the question bank, scoring engine, answer archive and active session.
pub struct AssessmentService<S> {
    bank: Arc<QuestionBank>,
    engine: ScoringEngine,
    archive: AnswerArchive<S>,
    session: Mutex<Option<AssessmentSession>>,
}

impl<S> AssessmentService<S>
where
    S: BlobStore + 'static,
{
    pub fn new(bank: Arc<QuestionBank>, config: ScoringConfig, store: S) -> Self {
        let engine = ScoringEngine::new(Arc::clone(&bank), config);
        Self {
            bank,
            engine,
            archive: AnswerArchive::new(store),
            session: Mutex::new(None),
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn archive(&self) -> &AnswerArchive<S> {
        &self.archive
    }

    /// Sections and questions without answer keys.
    pub fn questions(&self) -> Vec<SectionOutline> {
        SectionOutline::from_bank(&self.bank)
    }

    /// Begin a fresh session, replacing any session already in progress.
    pub fn start(&self) -> Result<SessionView, ServiceError> {
        let session = AssessmentSession::new(Arc::clone(&self.bank));
        let view = SessionView::from_session(&session).ok_or(ServiceError::NoSession)?;

        let mut slot = self.lock_session();
        if slot.replace(session).is_some() {
            info!("replaced assessment session in progress");
        } else {
            info!("assessment session started");
        }
        Ok(view)
    }

    pub fn current(&self) -> Result<SessionView, ServiceError> {
        let slot = self.lock_session();
        slot.as_ref()
            .and_then(SessionView::from_session)
            .ok_or(ServiceError::NoSession)
    }

    /// Record an answer for the displayed question; the final answer archives and scores the set.
    pub fn answer(&self, submission: AnswerSubmission) -> Result<AnswerOutcome, ServiceError> {
        let mut slot = self.lock_session();
        let session = slot.as_mut().ok_or(ServiceError::NoSession)?;

        let answer = Answer::new(submission.question_id, submission.value);
        match session.submit(answer)? {
            Advance::NextQuestion(_) | Advance::NextSection { .. } => {
                let view = SessionView::from_session(session).ok_or(ServiceError::NoSession)?;
                Ok(AnswerOutcome::InProgress { session: view })
            }
            Advance::Complete(answers) => {
                if let Err(error) = self.archive.persist(&answers) {
                    warn!(%error, "archiving answers failed; final question reopened");
                    session.go_back();
                    return Err(error.into());
                }
                *slot = None;
                Ok(AnswerOutcome::Complete {
                    assessment: self.score(&answers),
                })
            }
        }
    }

    /// Step back one question; leaving from the first question discards the session.
    pub fn back(&self) -> Result<BackOutcome, ServiceError> {
        let mut slot = self.lock_session();
        let session = slot.as_mut().ok_or(ServiceError::NoSession)?;

        match session.go_back() {
            Rewind::Question(_) => {
                let view = SessionView::from_session(session).ok_or(ServiceError::NoSession)?;
                Ok(BackOutcome::InProgress { session: view })
            }
            Rewind::Exit => {
                *slot = None;
                Ok(BackOutcome::Exited)
            }
        }
    }

    /// Score the archived answers.
    pub fn results(&self) -> Result<ScoredAssessment, ServiceError> {
        let answers = self.archive.load()?;
        Ok(self.score(&answers))
    }

    /// Clear archived answers and any active session.
    pub fn restart(&self) -> Result<(), ServiceError> {
        self.archive.clear()?;
        self.lock_session().take();
        info!("assessment restarted");
        Ok(())
    }

    /// Stateless scoring of a caller-supplied answer list.
    pub fn score(&self, answers: &[Answer]) -> ScoredAssessment {
        let result = self.engine.score(answers);
        let report = ResultReport::from_result(&result);
        ScoredAssessment { result, report }
    }

    fn lock_session(&self) -> MutexGuard<'_, Option<AssessmentSession>> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no assessment session in progress")]
    NoSession,
    #[error(transparent)]
    Progression(#[from] ProgressionError),
    #[error(transparent)]
    Results(#[from] ResultsError),
}
