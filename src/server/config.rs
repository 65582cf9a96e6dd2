use std::{net::SocketAddr, path::PathBuf};

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_TTL_HOURS: i64 = 168;
const DEFAULT_FILES_ROOT: &str = "wwwroot";
const DEFAULT_ADMIN_PASSWORD: &str = "admin";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_ttl: Duration,

    pub bind_address: SocketAddr,
    /// Directory under which uploaded documents are stored and served.
    pub files_root: PathBuf,

    /// Password of the admin account seeded into an empty database.
    pub default_admin_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_ttl_hours: i64 = parse_or("JWT_TTL_HOURS", DEFAULT_JWT_TTL_HOURS)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_ttl: Duration::hours(jwt_ttl_hours),
            bind_address: parse_or("BIND_ADDRESS", SocketAddr::from(([0, 0, 0, 0], 8080)))?,
            files_root: std::env::var("FILES_ROOT")
                .unwrap_or_else(|_| DEFAULT_FILES_ROOT.to_string())
                .into(),
            default_admin_password: std::env::var("DEFAULT_ADMIN_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| invalid(name, &value)),
        Err(_) => Ok(default),
    }
}

fn invalid(name: &str, value: &str) -> ConfigError {
    ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    }
}
