// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server settings, read from `HOSTEL_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            db_path: "hostel.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            max_workers: 8,
            log_json: false,
        }
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "1" | "true" | "TRUE" | "yes" | "YES" => Ok(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Ok(false),
        other => Err(ConfigError::Invalid {
            name,
            expected: "a boolean",
            value: other.to_string(),
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unset variables keep their defaults; set but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();

        if let Some(v) = lookup("HOSTEL_ADDR") {
            cfg.addr = v.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "HOSTEL_ADDR",
                expected: "a socket address like 127.0.0.1:3000",
                value: v.clone(),
            })?;
        }
        if let Some(v) = lookup("HOSTEL_DB_PATH") {
            cfg.db_path = v;
        }
        if let Some(v) = lookup("HOSTEL_SCHEMA_PATH") {
            cfg.schema_path = v;
        }
        if let Some(v) = lookup("HOSTEL_MAX_WORKERS") {
            cfg.max_workers = v
                .trim()
                .parse()
                .ok()
                .filter(|n: &usize| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    name: "HOSTEL_MAX_WORKERS",
                    expected: "a positive integer",
                    value: v.clone(),
                })?;
        }
        if let Some(v) = lookup("HOSTEL_LOG_JSON") {
            cfg.log_json = parse_bool("HOSTEL_LOG_JSON", &v)?;
        }

        Ok(cfg)
    }
}

/// Settings for the backend client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend root, with a trailing slash.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
