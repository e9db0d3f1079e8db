use grade_admin::env::{AppConfig, load_environment};
use grade_admin::error::AppError;
use grade_admin::init_rocket;
use grade_admin::telemetry::init_tracing;
use sqlx::sqlite::SqlitePoolOptions;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Anyhow(anyhow::Error),
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Application error: {0}")]
    App(#[from] AppError),
    #[error("{0}")]
    Rocket(Box<rocket::Error>),
}

impl From<anyhow::Error> for Error {
    fn from(value: anyhow::Error) -> Self {
        Error::Anyhow(value)
    }
}

impl From<rocket::Error> for Error {
    fn from(value: rocket::Error) -> Self {
        Error::Rocket(Box::new(value))
    }
}

#[rocket::main]
async fn main() -> Result<(), Error> {
    if let Err(err) = load_environment() {
        return Err(anyhow::anyhow!("Failed to load environment: {}", err).into());
    }

    let tracer_provider = init_tracing();
    let config = AppConfig::from_env()?;

    let pool = SqlitePoolOptions::new()
        .connect(&config.database_url)
        .await?;

    info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(AppError::from)?;
    info!("Migrations completed successfully");

    init_rocket(pool, &config, tracer_provider).launch().await?;

    Ok(())
}
