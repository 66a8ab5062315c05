//! Environment-based application configuration.

use std::str::FromStr;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_S3_REGION: &str = "us-east-1";
const DEFAULT_NUMBER_START: i32 = 1;
const DEFAULT_NUMBER_END: i32 = 99;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,

    pub s3_url: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    pub s3_region: String,
    /// Prepended to every bucket name, allowing several deployments to share one store.
    pub s3_bucket_prefix: String,

    /// Usernames resolved to the admin role without an invitation.
    pub admin_usernames: Vec<String>,
    /// Bot handle used to build invitation deep links.
    pub bot_username: String,

    /// Inclusive range pilot racing numbers are drawn from.
    pub number_start: i32,
    pub number_end: i32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a local `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parsable
    /// - `Err(AppError::Config(MissingEnvVar))` - A required variable is not set
    /// - `Err(AppError::Config(InvalidEnvVar))` - A numeric variable failed to parse
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            s3_url: required("S3_URL")?,
            s3_access_key: required("S3_ACCESS_KEY")?,
            s3_secret_key: required("S3_SECRET_KEY")?,
            s3_region: optional("S3_REGION").unwrap_or_else(|| DEFAULT_S3_REGION.to_string()),
            s3_bucket_prefix: optional("S3_BUCKET_PREFIX").unwrap_or_default(),
            admin_usernames: optional("ADMIN_USERNAMES")
                .map(|value| parse_list(&value))
                .unwrap_or_default(),
            bot_username: optional("BOT_USERNAME").unwrap_or_default(),
            number_start: parsed("PILOT_NUMBER_START", DEFAULT_NUMBER_START)?,
            number_end: parsed("PILOT_NUMBER_END", DEFAULT_NUMBER_END)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parsed<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match optional(name) {
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

/// Splits a comma separated list, dropping blanks and a leading `@` on usernames.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|item| item.trim().trim_start_matches('@'))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
