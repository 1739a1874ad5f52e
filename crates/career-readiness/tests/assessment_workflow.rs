use std::sync::Arc;

use career_readiness::assessment::{
    self, Advance, Answer, AnswerValue, AssessmentSession, CareerFit, QuestionBank, QuestionKind,
    ResultReport, Rewind, SessionState,
};

fn respond(session: &mut AssessmentSession, likert: u8) -> Advance {
    let question = session.current_question().cloned().expect("question displayed");
    let answer = match question.kind {
        QuestionKind::Likert => Answer::likert(&question.id, likert),
        _ => Answer::choice(&question.id, question.answer_key.clone().unwrap_or_default()),
    };
    session.submit(answer).expect("answer accepted")
}

#[test]
fn respondent_completes_assessment_and_receives_report() {
    let mut session = AssessmentSession::new(Arc::new(QuestionBank::standard()));
    assert_eq!(session.go_back(), Rewind::Exit);

    let answers = loop {
        if let Advance::Complete(answers) = respond(&mut session, 4) {
            break answers;
        }
    };

    let result = assessment::score(&answers);
    assert_eq!(result.career_fit, CareerFit::Strong);

    let report = ResultReport::from_result(&result);
    let text = report.share_text();
    assert!(text.contains("Overall: 100/100 (Strong Match, 90% confidence)"));
    assert!(text.contains("Technical Readiness: 100/100 (Excellent)"));
    assert!(text.contains("Real-World Fit"));
    assert!(text.contains("1. Start applying for junior Technical Support Engineer positions"));
    assert!(!text.contains("Alternative Career Paths"));
}

#[test]
fn interrupted_session_resumes_from_stored_state() {
    let bank = Arc::new(QuestionBank::standard());
    let mut session = AssessmentSession::new(Arc::clone(&bank));
    for _ in 0..9 {
        respond(&mut session, 2);
    }

    let stored = serde_json::to_string(session.state()).expect("state serializes");
    let state: SessionState = serde_json::from_str(&stored).expect("state parses");
    let mut resumed = AssessmentSession::resume(bank, state).expect("state is consistent");

    assert_eq!(
        resumed.current_question().map(|question| question.id.as_str()),
        Some("tech_3")
    );
    assert_eq!(resumed.answers().len(), 9);
    assert_eq!(resumed.state().section_completion, vec![true, false, false, false]);

    resumed.go_back();
    assert_eq!(
        resumed.current_answer().map(|answer| &answer.value),
        Some(&AnswerValue::Choice("ping".to_string()))
    );
}

#[test]
fn persisted_answer_format_is_scored_directly() {
    let raw = r#"[
        {"questionId": "psych_1", "value": 4, "timestamp": "2025-03-14T09:30:00.000Z"},
        {"questionId": "tech_1", "value": "Domain Name System", "timestamp": "2025-03-14T09:31:00.000Z"},
        {"questionId": "wiscar_2", "value": 3, "timestamp": "2025-03-14T09:32:00.000Z"}
    ]"#;

    let answers: Vec<Answer> = serde_json::from_str(raw).expect("browser answer format parses");
    let result = assessment::score(&answers);

    // 100 / 7
    assert_eq!(result.psychometric_score, 14);
    // 1 / 11
    assert_eq!(result.technical_score, 9);
    assert_eq!(result.wiscar_scores.interest, 75);
}
