use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRATION_SECONDS: i64 = 3600;

pub struct Config {
    pub database_url: String,
    pub server_addr: String,

    pub jwt_secret: String,
    pub jwt_expiration_seconds: i64,
    pub bcrypt_cost: u32,

    /// Allowed CORS origin; any origin is allowed when unset.
    pub cors_allowed_origin: Option<String>,

    /// Credentials for the first admin account, created at startup if no admin exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            server_addr: optional("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string()),
            jwt_secret: required("JWT_SECRET")?,
            jwt_expiration_seconds: parsed("JWT_EXPIRATION_SECONDS")?
                .unwrap_or(DEFAULT_JWT_EXPIRATION_SECONDS),
            bcrypt_cost: parsed("BCRYPT_COST")?.unwrap_or(bcrypt::DEFAULT_COST),
            cors_allowed_origin: optional("CORS_ALLOWED_ORIGIN"),
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    optional(name)
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            })
        })
        .transpose()
}
