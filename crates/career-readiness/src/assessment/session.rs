use super::bank::{QuestionBank, Section};
use super::domain::{Answer, AnswerValue, Question, QuestionCategory, LIKERT_MAX};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Zero-based location of the displayed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub section_index: usize,
    pub question_index: usize,
}

impl Position {
    pub const START: Self = Self {
        section_index: 0,
        question_index: 0,
    };
}

/// Serializable snapshot of a session, suitable for storing verbatim and resuming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub current_section_index: usize,
    pub current_question_index: usize,
    pub answers: Vec<Answer>,
    /// Indexed like the bank's sections.
    pub section_completion: Vec<bool>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub complete: bool,
}

impl SessionState {
    fn fresh(section_count: usize) -> Self {
        Self {
            current_section_index: 0,
            current_question_index: 0,
            answers: Vec::new(),
            section_completion: vec![false; section_count],
            started_at: Utc::now(),
            complete: false,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            section_index: self.current_section_index,
            question_index: self.current_question_index,
        }
    }

    fn move_to(&mut self, position: Position) {
        self.current_section_index = position.section_index;
        self.current_question_index = position.question_index;
    }

    /// Replaces an existing answer in place or appends a new one.
    fn upsert(&mut self, answer: Answer) {
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question_id == answer.question_id)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
    }
}

/// Result of a successful [`AssessmentSession::submit`].
#[derive(Debug, Clone, PartialEq)]
pub enum Advance {
    NextQuestion(Position),
    NextSection {
        completed: QuestionCategory,
        position: Position,
    },
    /// Every section is exhausted; carries the final answer list for scoring.
    Complete(Vec<Answer>),
}

/// Result of [`AssessmentSession::go_back`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewind {
    Question(Position),
    /// Already at the first question; the caller should leave the assessment.
    Exit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("assessment already complete")]
    AlreadyComplete,
    #[error("expected an answer for {expected}, received {received}")]
    UnexpectedQuestion { expected: String, received: String },
    #[error("no option selected for {0}")]
    EmptySelection(String),
    #[error("value for {0} is neither a scale index nor an option")]
    UnreadableValue(String),
    #[error("value {value} for {question_id} is outside the 0-{max} scale")]
    OutOfScale {
        question_id: String,
        value: u8,
        max: u8,
    },
    #[error("session state is inconsistent with the question bank: {0}")]
    InvalidState(String),
}

/// Drives a respondent through the bank one question at a time.
#[derive(Debug, Clone)]
pub struct AssessmentSession {
    bank: Arc<QuestionBank>,
    state: SessionState,
}

impl AssessmentSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        let state = SessionState::fresh(bank.section_count());
        Self { bank, state }
    }

    /// Rebuilds a session from a stored snapshot after checking its invariants.
    pub fn resume(bank: Arc<QuestionBank>, state: SessionState) -> Result<Self, ProgressionError> {
        validate_state(&bank, &state)?;
        Ok(Self { bank, state })
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }

    pub fn answers(&self) -> &[Answer] {
        &self.state.answers
    }

    pub fn is_complete(&self) -> bool {
        self.state.complete
    }

    pub fn position(&self) -> Position {
        self.state.position()
    }

    pub fn current_section(&self) -> Option<&Section> {
        if self.state.complete {
            return None;
        }
        self.bank.section(self.state.current_section_index)
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_section()
            .and_then(|section| section.questions.get(self.state.current_question_index))
    }

    /// Previously recorded answer for the displayed question, if any.
    pub fn current_answer(&self) -> Option<&Answer> {
        let question = self.current_question()?;
        self.state
            .answers
            .iter()
            .find(|answer| answer.question_id == question.id)
    }

    /// Answers the displayed question and moves forward.
    pub fn submit(&mut self, answer: Answer) -> Result<Advance, ProgressionError> {
        let question = self
            .current_question()
            .ok_or(ProgressionError::AlreadyComplete)?;

        if answer.question_id != question.id {
            return Err(ProgressionError::UnexpectedQuestion {
                expected: question.id.clone(),
                received: answer.question_id,
            });
        }
        check_selection(&answer)?;

        debug!(question_id = %answer.question_id, value = %answer.value, "answer recorded");
        self.state.upsert(answer);

        let section_index = self.state.current_section_index;
        let section = &self.bank.sections()[section_index];
        let category = section.category;

        if self.state.current_question_index < section.last_index() {
            self.state.current_question_index += 1;
            return Ok(Advance::NextQuestion(self.position()));
        }

        self.state.section_completion[section_index] = true;

        if section_index + 1 < self.bank.section_count() {
            info!(section = %section.name, "section completed");
            let position = Position {
                section_index: section_index + 1,
                question_index: 0,
            };
            self.state.move_to(position);
            return Ok(Advance::NextSection {
                completed: category,
                position,
            });
        }

        self.state.complete = true;
        info!(answers = self.state.answers.len(), "assessment complete");
        Ok(Advance::Complete(self.state.answers.clone()))
    }

    /// Steps back one question, crossing section boundaries. Never discards answers.
    pub fn go_back(&mut self) -> Rewind {
        if self.state.complete {
            self.state.complete = false;
            debug!("reopened completed assessment at its last question");
            return Rewind::Question(self.position());
        }

        if self.state.current_question_index > 0 {
            self.state.current_question_index -= 1;
            return Rewind::Question(self.position());
        }

        if self.state.current_section_index > 0 {
            let section_index = self.state.current_section_index - 1;
            let question_index = self.bank.sections()[section_index].last_index();
            let position = Position {
                section_index,
                question_index,
            };
            self.state.move_to(position);
            return Rewind::Question(position);
        }

        info!("respondent left the assessment from the first question");
        Rewind::Exit
    }

    /// Percentage of bank questions answered, for display.
    pub fn overall_progress(&self) -> f32 {
        let total = self.bank.total_questions();
        if total == 0 {
            return 0.0;
        }
        (self.state.answers.len() as f32 / total as f32) * 100.0
    }
}

fn check_selection(answer: &Answer) -> Result<(), ProgressionError> {
    if answer.value.is_empty_selection() {
        return Err(ProgressionError::EmptySelection(answer.question_id.clone()));
    }
    if answer.value.is_unrecognized() {
        return Err(ProgressionError::UnreadableValue(answer.question_id.clone()));
    }

    if let AnswerValue::Likert(value) = answer.value {
        if value > LIKERT_MAX {
            return Err(ProgressionError::OutOfScale {
                question_id: answer.question_id.clone(),
                value,
                max: LIKERT_MAX,
            });
        }
    }

    Ok(())
}

fn validate_state(bank: &QuestionBank, state: &SessionState) -> Result<(), ProgressionError> {
    if state.section_completion.len() != bank.section_count() {
        return Err(ProgressionError::InvalidState(format!(
            "{} completion flags for {} sections",
            state.section_completion.len(),
            bank.section_count()
        )));
    }

    let section = bank
        .section(state.current_section_index)
        .ok_or_else(|| {
            ProgressionError::InvalidState(format!(
                "section index {} out of range",
                state.current_section_index
            ))
        })?;
    if state.current_question_index >= section.len() {
        return Err(ProgressionError::InvalidState(format!(
            "question index {} out of range for {}",
            state.current_question_index, section.name
        )));
    }

    let mut seen = HashSet::new();
    for answer in &state.answers {
        if !seen.insert(answer.question_id.as_str()) {
            return Err(ProgressionError::InvalidState(format!(
                "duplicate answer for {}",
                answer.question_id
            )));
        }
        if bank.question(&answer.question_id).is_none() {
            return Err(ProgressionError::InvalidState(format!(
                "answer for unknown question {}",
                answer.question_id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> AssessmentSession {
        AssessmentSession::new(Arc::new(QuestionBank::standard()))
    }

    #[test]
    fn new_session_starts_at_first_question() {
        let session = session();

        assert_eq!(session.position(), Position::START);
        assert_eq!(
            session.current_question().map(|question| question.id.as_str()),
            Some("psych_1")
        );
        assert!(session.answers().is_empty());
        assert_eq!(session.state().section_completion, vec![false; 4]);
        assert_eq!(session.overall_progress(), 0.0);
    }

    #[test]
    fn submit_rejects_answers_for_other_questions() {
        let mut session = session();

        let error = session
            .submit(Answer::likert("psych_2", 3))
            .expect_err("psych_1 is displayed");

        assert_eq!(
            error,
            ProgressionError::UnexpectedQuestion {
                expected: "psych_1".to_string(),
                received: "psych_2".to_string(),
            }
        );
        assert!(session.answers().is_empty());
    }

    #[test]
    fn submit_rejects_empty_and_out_of_scale_values() {
        let mut session = session();

        assert!(matches!(
            session.submit(Answer::choice("psych_1", "  ")),
            Err(ProgressionError::EmptySelection(_))
        ));
        assert!(matches!(
            session.submit(Answer::likert("psych_1", 5)),
            Err(ProgressionError::OutOfScale { value: 5, .. })
        ));
        assert_eq!(
            session.submit(Answer::new(
                "psych_1",
                AnswerValue::Unrecognized(serde_json::json!(2.5))
            )),
            Err(ProgressionError::UnreadableValue("psych_1".to_string()))
        );
        assert_eq!(session.position(), Position::START);
    }

    #[test]
    fn go_back_from_first_question_signals_exit() {
        let mut session = session();
        assert_eq!(session.go_back(), Rewind::Exit);
        assert_eq!(session.position(), Position::START);
    }

    #[test]
    fn go_back_crosses_into_previous_section_last_question() {
        let mut session = session();
        for index in 1..=7 {
            session
                .submit(Answer::likert(format!("psych_{index}"), 2))
                .expect("psychometric answer accepted");
        }
        assert_eq!(
            session.position(),
            Position {
                section_index: 1,
                question_index: 0
            }
        );
        assert_eq!(session.state().section_completion, vec![true, false, false, false]);

        let rewind = session.go_back();

        assert_eq!(
            rewind,
            Rewind::Question(Position {
                section_index: 0,
                question_index: 6
            })
        );
        assert_eq!(session.answers().len(), 7);
        assert_eq!(
            session.current_answer().map(|answer| &answer.value),
            Some(&AnswerValue::Likert(2))
        );
    }

    #[test]
    fn resume_rejects_out_of_range_positions() {
        let mut state = session().into_state();
        state.current_question_index = 7;

        let error = AssessmentSession::resume(Arc::new(QuestionBank::standard()), state)
            .expect_err("psychometric section has 7 questions");

        assert!(matches!(error, ProgressionError::InvalidState(_)));
    }

    #[test]
    fn resume_rejects_duplicate_answers() {
        let mut state = session().into_state();
        state.answers.push(Answer::likert("psych_1", 1));
        state.answers.push(Answer::likert("psych_1", 2));

        let error = AssessmentSession::resume(Arc::new(QuestionBank::standard()), state)
            .expect_err("duplicate ids");

        assert!(matches!(error, ProgressionError::InvalidState(_)));
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut session = session();
        session
            .submit(Answer::likert("psych_1", 4))
            .expect("answer accepted");

        let json = serde_json::to_string(session.state()).expect("state serializes");
        assert!(json.contains("\"currentQuestionIndex\":1"));

        let state: SessionState = serde_json::from_str(&json).expect("state parses");
        let resumed =
            AssessmentSession::resume(Arc::new(QuestionBank::standard()), state).expect("resumes");
        assert_eq!(
            resumed.current_question().map(|question| question.id.as_str()),
            Some("psych_2")
        );
    }
}
