mod cli;
mod infra;
mod report;
mod routes;
mod server;

use creative_style::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
