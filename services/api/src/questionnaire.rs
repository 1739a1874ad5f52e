use career_readiness::assessment::{
    Advance, Answer, AnswerArchive, AssessmentSession, BlobStore, QuestionBank, ResultReport,
    Rewind, ScoringConfig, ScoringEngine, SessionView,
};
use career_readiness::config::AppConfig;
use career_readiness::error::AppError;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::infra::{file_store, load_bank};

/// How an interactive run ended.
#[derive(Debug, PartialEq)]
pub(crate) enum Finish {
    Completed(Vec<Answer>),
    Exited,
}

enum Command {
    Choose(usize),
    Back,
    Quit,
}

/// An empty line re-submits `selected`; the error is the hint to print before re-prompting.
fn parse_command(line: &str, selected: Option<usize>) -> Result<Command, &'static str> {
    match line.trim().to_ascii_lowercase().as_str() {
        "" => selected
            .map(Command::Choose)
            .ok_or("Please select an option."),
        "b" | "back" => Ok(Command::Back),
        "q" | "quit" => Ok(Command::Quit),
        other => other
            .parse::<usize>()
            .ok()
            .filter(|choice| *choice > 0)
            .map(|choice| Command::Choose(choice - 1))
            .ok_or("Enter an option number, 'b' to go back or 'q' to quit."),
    }
}

pub(crate) fn run_take() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let bank = load_bank(&config.storage)?;
    let archive = AnswerArchive::new(file_store(&config.storage));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let finish = run_questionnaire(Arc::clone(&bank), stdin.lock(), stdout.lock())?;

    match finish {
        Finish::Completed(answers) => {
            let mut out = io::stdout().lock();
            report_and_save(bank, &archive, &answers, &mut out)?;
            writeln!(out, "\nAnswers saved to {}", config.storage.data_dir.display())?;
        }
        Finish::Exited => println!("Assessment exited; nothing was saved."),
    }
    Ok(())
}

/// Prints the report, then archives the answers. A failed save echoes the answers as JSON
/// so they can be scored later with `score --answers`.
pub(crate) fn report_and_save<S, W>(
    bank: Arc<QuestionBank>,
    archive: &AnswerArchive<S>,
    answers: &[Answer],
    out: &mut W,
) -> Result<(), AppError>
where
    S: BlobStore,
    W: Write,
{
    let result = ScoringEngine::new(bank, ScoringConfig::default()).score(answers);
    writeln!(out)?;
    write!(out, "{}", ResultReport::from_result(&result).share_text())?;

    if let Err(error) = archive.persist(answers) {
        writeln!(out, "\nCould not save answers: {error}")?;
        writeln!(out, "Your answers, for `score --answers`:")?;
        writeln!(out, "{}", serde_json::to_string(answers)?)?;
        return Err(error.into());
    }
    Ok(())
}

/// Drives a session from line-based input until it completes or the respondent leaves.
pub(crate) fn run_questionnaire<R, W>(
    bank: Arc<QuestionBank>,
    input: R,
    mut out: W,
) -> io::Result<Finish>
where
    R: BufRead,
    W: Write,
{
    let mut session = AssessmentSession::new(bank);
    let mut lines = input.lines();

    loop {
        let Some(view) = SessionView::from_session(&session) else {
            return Ok(Finish::Completed(session.answers().to_vec()));
        };
        render(&mut out, &view)?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(Finish::Exited);
        };

        let command = match parse_command(&line, view.question.selected) {
            Ok(command) => command,
            Err(hint) => {
                writeln!(out, "{hint}")?;
                continue;
            }
        };

        match command {
            Command::Quit => return Ok(Finish::Exited),
            Command::Back => {
                if session.go_back() == Rewind::Exit {
                    return Ok(Finish::Exited);
                }
            }
            Command::Choose(index) => {
                let Some(value) = session
                    .current_question()
                    .and_then(|question| question.value_for_choice(index))
                else {
                    writeln!(out, "Option {} is not available.", index + 1)?;
                    continue;
                };
                let answer = Answer::new(view.question.id.clone(), value);
                match session.submit(answer) {
                    Ok(Advance::NextSection { .. }) => {
                        writeln!(out, "\nSection complete: {}", view.section_name)?;
                    }
                    Ok(Advance::Complete(answers)) => return Ok(Finish::Completed(answers)),
                    Ok(Advance::NextQuestion(_)) => {}
                    Err(error) => writeln!(out, "{error}")?,
                }
            }
        }
    }
}

fn render<W: Write>(out: &mut W, view: &SessionView) -> io::Result<()> {
    writeln!(out)?;
    if view.question_number == 1 {
        writeln!(out, "== {} ==", view.section_name)?;
        writeln!(out, "{}", view.section_description)?;
    }
    writeln!(
        out,
        "{} | {} | {:.0}% complete",
        view.section_caption(),
        view.question_caption(),
        view.progress_pct
    )?;
    writeln!(out, "{}", view.question.text)?;
    for (index, choice) in view.question.choices.iter().enumerate() {
        let marker = if view.question.selected == Some(index) {
            '*'
        } else {
            ' '
        };
        writeln!(out, " {marker}{}. {choice}", index + 1)?;
    }
    write!(out, "> ")?;
    out.flush()
}
