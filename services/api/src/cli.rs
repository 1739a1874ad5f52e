use crate::demo::{run_demo, DemoArgs};
use crate::infra::{file_store, load_bank, read_answers_file};
use crate::questionnaire::run_take;
use crate::server;
use career_readiness::assessment::{
    AnswerArchive, QuestionBank, ResultReport, ScoredAssessment, ScoringConfig, ScoringEngine,
};
use career_readiness::config::AppConfig;
use career_readiness::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Career Readiness Assessment",
    about = "Run the Technical Support Engineer readiness assessment from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Take the assessment interactively in the terminal
    Take,
    /// Score a JSON answer file, or the most recently archived answers
    Score(ScoreArgs),
    /// Walk a scripted respondent through the assessment and print the report
    Demo(DemoArgs),
    /// Inspect question bank CSV files
    Bank {
        #[command(subcommand)]
        command: BankCommand,
    },
}

#[derive(Subcommand, Debug)]
enum BankCommand {
    /// Load and validate a question bank CSV
    Validate(BankValidateArgs),
    /// Write the built-in question bank as CSV
    Export(BankExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file holding `[{questionId, value, timestamp}]`; defaults to the archive
    #[arg(long)]
    pub(crate) answers: Option<PathBuf>,
    /// Print the scored assessment as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BankValidateArgs {
    /// Path to the CSV bank
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct BankExportArgs {
    /// Destination file (stdout when omitted)
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Take => run_take(),
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
        Command::Bank {
            command: BankCommand::Validate(args),
        } => run_bank_validate(args),
        Command::Bank {
            command: BankCommand::Export(args),
        } => run_bank_export(args),
    }
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let bank = load_bank(&config.storage)?;

    let answers = match &args.answers {
        Some(path) => read_answers_file(path)?,
        None => AnswerArchive::new(file_store(&config.storage)).load()?,
    };

    let result = ScoringEngine::new(bank, ScoringConfig::default()).score(&answers);
    let report = ResultReport::from_result(&result);
    if args.json {
        let assessment = ScoredAssessment { result, report };
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", report.share_text());
    }
    Ok(())
}

fn run_bank_validate(args: BankValidateArgs) -> Result<(), AppError> {
    let bank = QuestionBank::from_path(&args.csv)?;

    println!("{} is valid", args.csv.display());
    for (index, section) in bank.sections().iter().enumerate() {
        println!(
            "  {}. {} ({}): {} questions",
            index + 1,
            section.name,
            section.category.key(),
            section.len()
        );
    }
    println!(
        "  total: {} questions, {} graded",
        bank.total_questions(),
        bank.graded_questions().count()
    );
    Ok(())
}

fn run_bank_export(args: BankExportArgs) -> Result<(), AppError> {
    let bank = QuestionBank::standard();
    match args.output {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            bank.write_csv(file)?;
            println!("wrote {} questions to {}", bank.total_questions(), path.display());
        }
        None => bank.write_csv(std::io::stdout().lock())?,
    }
    Ok(())
}
