mod cli;
mod infra;
mod routes;
mod rubric_cli;
mod server;

use coach_journal::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
