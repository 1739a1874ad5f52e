mod cli;
mod demo;
mod infra;
mod questionnaire;
mod routes;
mod server;

use career_readiness::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
