#[macro_use]
extern crate rocket;

pub mod api;
pub mod auth;
pub mod client;
pub mod db;
pub mod env;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod ui;
pub mod validation;

#[cfg(test)]
mod test;

use opentelemetry_sdk::trace::SdkTracerProvider;
use rocket::{Build, Rocket};
use sqlx::SqlitePool;
use tracing::info;

use auth::{PasswordHasher, TokenKeys};
use env::AppConfig;
use telemetry::TelemetryFairing;

/// Assembles the service around an already migrated pool.
pub fn init_rocket(
    pool: SqlitePool,
    config: &AppConfig,
    tracer_provider: Option<SdkTracerProvider>,
) -> Rocket<Build> {
    info!("Starting grade admin service");

    let figment = rocket::Config::figment().merge(("port", config.port));

    rocket::custom(figment)
        .manage(pool)
        .manage(TokenKeys::new(&config.token_secret, config.token_ttl_secs))
        .manage(PasswordHasher::new(config.bcrypt_cost))
        .mount("/", api::routes())
        .register("/", catchers![api::default_catcher])
        .attach(TelemetryFairing::new(tracer_provider))
}
