use career_readiness::assessment::{
    Advance, Answer, AssessmentSession, Question, QuestionBank, QuestionKind, ResultReport,
    ScoredAssessment, ScoringConfig, ScoringEngine, SessionView,
};
use career_readiness::error::AppError;
use clap::{Args, ValueEnum};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub(crate) enum DemoProfile {
    /// Enthusiastic respondent who knows every technical answer
    #[default]
    Strong,
    /// Neutral attitudes, solid technical knowledge
    Moderate,
    /// Low affinity and no technical background
    Low,
}

impl DemoProfile {
    fn likert(self) -> u8 {
        match self {
            Self::Strong => 4,
            Self::Moderate => 2,
            Self::Low => 1,
        }
    }

    fn knows_answers(self) -> bool {
        !matches!(self, Self::Low)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Scripted respondent to walk through the questionnaire
    #[arg(long, value_enum, default_value_t = DemoProfile::Strong)]
    pub(crate) profile: DemoProfile,
    /// Print the scored assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { profile, json } = args;
    let bank = Arc::new(QuestionBank::standard());

    println!("Career readiness demo ({} profile)", profile.label());
    let answers = walk_session(Arc::clone(&bank), profile);

    let result = ScoringEngine::new(bank, ScoringConfig::default()).score(&answers);
    let report = ResultReport::from_result(&result);

    if json {
        let assessment = ScoredAssessment { result, report };
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        println!();
        print!("{}", report.share_text());
    }
    Ok(())
}

/// Answers every question for `profile`, printing progress at each section boundary.
pub(crate) fn walk_session(bank: Arc<QuestionBank>, profile: DemoProfile) -> Vec<Answer> {
    let mut session = AssessmentSession::new(bank);

    while let Some(view) = SessionView::from_session(&session) {
        let Some(question) = session.current_question().cloned() else {
            break;
        };
        let answer = scripted_answer(&question, profile);

        match session.submit(answer) {
            Ok(Advance::NextSection { .. }) | Ok(Advance::Complete(_)) => {
                println!(
                    "- {} ({}) answered, {:.0}% complete",
                    view.section_name,
                    view.section_caption(),
                    session.overall_progress()
                );
            }
            Ok(Advance::NextQuestion(_)) => {}
            Err(error) => {
                println!("- skipped {}: {error}", question.id);
                break;
            }
        }
    }

    session.answers().to_vec()
}

fn scripted_answer(question: &Question, profile: DemoProfile) -> Answer {
    match question.kind {
        QuestionKind::Likert => Answer::likert(&question.id, profile.likert()),
        QuestionKind::MultipleChoice | QuestionKind::YesNo => {
            let key = question.answer_key.as_deref().unwrap_or_default();
            let choice = if profile.knows_answers() {
                Some(key)
            } else {
                question
                    .options
                    .iter()
                    .map(String::as_str)
                    .find(|option| *option != key)
            };
            Answer::choice(&question.id, choice.unwrap_or(key))
        }
    }
}
