// src/config.rs

use std::{env, str::FromStr};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} env var is required")]
    Missing(&'static str),

    #[error("HTTP_PORT must be a valid u16, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Staging,
    Production,
}

impl FromStr for AppEnv {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(AppEnv::Development),
            "staging" | "stage" => Ok(AppEnv::Staging),
            "production" | "prod" => Ok(AppEnv::Production),
            _ => Ok(AppEnv::Development), // default if unknown
        }
    }
}

impl AppEnv {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnv::Development => "development",
            AppEnv::Staging => "staging",
            AppEnv::Production => "production",
        }
    }
}

const DEFAULT_HTTP_PORT: u16 = 8001;

#[derive(Debug, Clone)]
pub struct Config {
    pub env: AppEnv,

    /// Postgres connection string for the document store.
    pub database_url: String,
    /// Database selected on the connection, overriding any name in `database_url`.
    pub database_name: String,

    pub http_port: u16,

    /// Allowed CORS origins. `["*"]` means any origin.
    pub cors_origins: Vec<String>,
}

/// Entry point to load configuration
pub fn load() -> Result<Config> {
    load_dotenv();
    Config::from_env()
}

/// Load .env base, then .env.{APP_ENV}
fn load_dotenv() {
    let _ = dotenvy::dotenv();

    let env_name = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let filename = format!(".env.{}", env_name);
    let _ = dotenvy::from_filename(&filename);
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_str = lookup("APP_ENV").unwrap_or_else(|| "development".to_string());
        let env = AppEnv::from_str(&env_str).unwrap_or(AppEnv::Development);

        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let database_name = lookup("DB_NAME")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DB_NAME"))?;

        let http_port = match lookup("HTTP_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_HTTP_PORT,
        };

        let cors_origins = parse_origins(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()));

        Ok(Self {
            env,
            database_url,
            database_name,
            http_port,
            cors_origins,
        })
    }
}

/// Split a comma-separated origin list. An empty list falls back to `*`.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        vec!["*".to_string()]
    } else {
        origins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost:5432"),
            ("DB_NAME", "origem"),
        ]))
        .unwrap();

        assert_eq!(cfg.env, AppEnv::Development);
        assert_eq!(cfg.http_port, 8001);
        assert_eq!(cfg.cors_origins, vec!["*".to_string()]);
        assert_eq!(cfg.database_name, "origem");
    }

    #[test]
    fn test_missing_required_keys() {
        let err = Config::from_lookup(lookup_from(&[("DB_NAME", "origem")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));

        let err = Config::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DB_NAME"));
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("DB_NAME", "origem"),
            ("HTTP_PORT", "99999"),
        ]))
        .unwrap_err();

        assert_eq!(err, ConfigError::InvalidPort("99999".to_string()));
    }

    #[test]
    fn test_cors_origin_list() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db"),
            ("DB_NAME", "origem"),
            ("APP_ENV", "prod"),
            ("CORS_ORIGINS", "https://origem.dev, http://localhost:3000,,"),
        ]))
        .unwrap();

        assert_eq!(cfg.env, AppEnv::Production);
        assert_eq!(
            cfg.cors_origins,
            vec!["https://origem.dev".to_string(), "http://localhost:3000".to_string()]
        );
    }
}
