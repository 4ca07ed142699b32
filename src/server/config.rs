use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
const DEFAULT_ACCESS_TOKEN_EXPIRES_MINUTES: i64 = 15;
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,

    pub jwt_secret_key: String,
    /// Lifetime of issued access tokens in minutes
    pub jwt_access_token_expires: i64,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a fixed map.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let jwt_secret_key = lookup("JWT_SECRET_KEY")
            .filter(|secret| !secret.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET_KEY".to_string()))?;

        let jwt_access_token_expires = parse_or(
            &lookup,
            "JWT_ACCESS_TOKEN_EXPIRES",
            DEFAULT_ACCESS_TOKEN_EXPIRES_MINUTES,
        )?;

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        Ok(Self {
            database_url,
            jwt_secret_key,
            jwt_access_token_expires,
            port,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}
