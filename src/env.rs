use std::path::Path;

use anyhow::{Context, bail};
use tracing::{info, warn};

pub const INSECURE_SECRET_PLACEHOLDER: &str = "sua-chave-secreta-super-segura";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;
const DEFAULT_BCRYPT_COST: u32 = 10;
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

pub fn is_production() -> bool {
    dotenvy::var("ROCKET_PROFILE").unwrap_or("development".to_string()) == "production"
}

pub fn load_environment() -> Result<(), Box<dyn std::error::Error>> {
    let env_files = if is_production() {
        vec!["config/common.env", "config/prod.env", ".secrets.env"]
    } else {
        vec!["config/common.env", "config/dev.env", ".secrets.env"]
    };

    for env_file in env_files {
        load_env_file(env_file)?;
    }

    Ok(())
}

fn load_env_file(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !Path::new(path).exists() {
        warn!("Warning: Environment file {} not found, skipping", path);
        return Ok(());
    }

    dotenvy::from_filename_override(path)?;
    info!("Loaded environment from: {}", path);
    Ok(())
}

/// Process configuration read from the environment after the env files are loaded.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub token_secret: String,
    pub token_ttl_secs: i64,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = dotenvy::var("DATABASE_URL").context("DATABASE_URL is not set")?;

        let port = parse_or("PORT", DEFAULT_PORT)?;
        let token_ttl_secs = parse_or("TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        let bcrypt_cost = parse_or("BCRYPT_COST", DEFAULT_BCRYPT_COST)?;

        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            bail!(
                "BCRYPT_COST must be between {} and {}",
                MIN_BCRYPT_COST,
                MAX_BCRYPT_COST
            );
        }

        let token_secret = match dotenvy::var("SECRET_KEY") {
            Ok(secret) if !secret.trim().is_empty() => secret,
            _ if is_production() => bail!("SECRET_KEY must be set in production"),
            _ => {
                warn!("SECRET_KEY not set, using an insecure placeholder secret");
                INSECURE_SECRET_PLACEHOLDER.to_string()
            }
        };

        Ok(Self {
            database_url,
            port,
            token_secret,
            token_ttl_secs,
            bcrypt_cost,
        })
    }
}

fn parse_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match dotenvy::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {}", key, raw)),
        Err(_) => Ok(default),
    }
}
