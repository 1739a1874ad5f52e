use super::common::*;
use crate::assessment::domain::{AnswerValue, QuestionCategory};
use crate::assessment::report::SessionView;
use crate::assessment::session::{Advance, Position, ProgressionError, Rewind};

#[test]
fn answering_every_question_completes_exactly_once() {
    let mut session = session();
    let total = session.bank().total_questions();
    let mut completions = 0;
    let mut section_changes = Vec::new();

    while let Some(question) = session.current_question().cloned() {
        match session
            .submit(answer_for(&question, 3, true))
            .expect("answer accepted")
        {
            Advance::NextQuestion(_) => {}
            Advance::NextSection { completed, .. } => section_changes.push(completed),
            Advance::Complete(answers) => {
                completions += 1;
                assert_eq!(answers.len(), total);
            }
        }
    }

    assert_eq!(completions, 1);
    assert!(session.is_complete());
    assert_eq!(
        section_changes,
        vec![
            QuestionCategory::Psychometric,
            QuestionCategory::Technical,
            QuestionCategory::Aptitude
        ]
    );
    assert_eq!(session.state().section_completion, vec![true; 4]);
    assert_eq!(session.overall_progress(), 100.0);
    assert!(matches!(
        session.submit(answer_for(&session.bank().sections()[0].questions[0], 1, true)),
        Err(ProgressionError::AlreadyComplete)
    ));
}

#[test]
fn reanswering_after_going_back_replaces_in_place() {
    let mut session = session();
    for likert in [1, 2, 3] {
        let question = session.current_question().cloned().expect("question");
        session
            .submit(answer_for(&question, likert, true))
            .expect("answer accepted");
    }

    assert!(matches!(session.go_back(), Rewind::Question(_)));
    assert!(matches!(session.go_back(), Rewind::Question(_)));
    assert_eq!(
        session.current_question().map(|question| question.id.as_str()),
        Some("psych_2")
    );

    session
        .submit(crate::assessment::domain::Answer::likert("psych_2", 4))
        .expect("revised answer accepted");

    let ids: Vec<&str> = session
        .answers()
        .iter()
        .map(|answer| answer.question_id.as_str())
        .collect();
    assert_eq!(ids, vec!["psych_1", "psych_2", "psych_3"]);
    assert_eq!(session.answers()[1].value, AnswerValue::Likert(4));
    assert_eq!(
        session.position(),
        Position {
            section_index: 0,
            question_index: 2
        }
    );
}

#[test]
fn progress_tracks_answered_fraction() {
    let mut session = session();
    for _ in 0..6 {
        let question = session.current_question().cloned().expect("question");
        session
            .submit(answer_for(&question, 2, true))
            .expect("answer accepted");
    }

    assert_eq!(session.overall_progress(), 25.0);

    session.go_back();
    assert_eq!(session.overall_progress(), 25.0);
}

#[test]
fn go_back_from_complete_reopens_last_question() {
    let mut session = session();
    while let Some(question) = session.current_question().cloned() {
        session
            .submit(answer_for(&question, 4, true))
            .expect("answer accepted");
    }

    let rewind = session.go_back();

    assert_eq!(
        rewind,
        Rewind::Question(Position {
            section_index: 3,
            question_index: 5
        })
    );
    assert!(!session.is_complete());
    assert_eq!(
        session.current_question().map(|question| question.id.as_str()),
        Some("wiscar_6")
    );

    let question = session.current_question().cloned().expect("question");
    let advance = session
        .submit(answer_for(&question, 1, true))
        .expect("answer accepted");
    match advance {
        Advance::Complete(answers) => {
            assert_eq!(answers.len(), 24);
            assert_eq!(answers[23].value, AnswerValue::Likert(1));
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn session_view_reports_section_captions_and_preselection() {
    let mut session = session();
    for _ in 0..7 {
        let question = session.current_question().cloned().expect("question");
        session
            .submit(answer_for(&question, 3, true))
            .expect("answer accepted");
    }
    let question = session.current_question().cloned().expect("question");
    session
        .submit(answer_for(&question, 0, false))
        .expect("answer accepted");
    session.go_back();

    let view = SessionView::from_session(&session).expect("in progress");

    assert_eq!(view.section_name, "Technical Knowledge");
    assert_eq!(view.section_caption(), "Section 2 of 4");
    assert_eq!(view.question_caption(), "Question 1 of 6 in this section");
    assert_eq!(view.question.id, "tech_1");
    assert_eq!(view.question.choices.len(), 4);
    assert_eq!(view.question.selected, Some(1));
    assert_eq!(view.answered, 8);
    assert_eq!(view.total_questions, 24);

    session.go_back();
    let view = SessionView::from_session(&session).expect("in progress");
    assert_eq!(view.question.id, "psych_7");
    assert_eq!(view.question.choices[3], "Agree");
    assert_eq!(view.question.selected, Some(3));
}
