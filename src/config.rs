use std::env;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_BULK_EMAILS: usize = 1000;

/// Errors raised while reading [`Settings`] from the environment.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("{name} must be one of true/false/1/0/yes/no, got '{value}'")]
    InvalidFlag { name: &'static str, value: String },

    #[error("MAX_BULK_EMAILS must be a positive number, got '{0}'")]
    InvalidBatchLimit(String),
}

/// Service settings.
///
/// Values come from the process environment, optionally seeded from a
/// `.env` file by the binary before [`Settings::from_env`] is called.
///
/// | Variable          | Default     |
/// |-------------------|-------------|
/// | `HOST`            | `127.0.0.1` |
/// | `PORT`            | `8080`      |
/// | `ALLOW_LOCAL`     | `false`     |
/// | `MAX_BULK_EMAILS` | `1000`      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Default for requests that don't specify `allow_local` themselves.
    pub allow_local: bool,
    pub max_bulk_emails: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            allow_local: false,
            max_bulk_emails: DEFAULT_MAX_BULK_EMAILS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Missing keys fall back
    /// to their defaults; present but malformed values are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);

        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => defaults.port,
        };

        let allow_local = match lookup("ALLOW_LOCAL") {
            Some(value) => parse_flag("ALLOW_LOCAL", value)?,
            None => defaults.allow_local,
        };

        let max_bulk_emails = match lookup("MAX_BULK_EMAILS") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidBatchLimit(value)),
            },
            None => defaults.max_bulk_emails,
        };

        Ok(Self {
            host,
            port,
            allow_local,
            max_bulk_emails,
        })
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}
