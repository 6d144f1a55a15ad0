// src/shared/config.rs
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres(DatabaseConfig),
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub auto_migrate: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreBackend,
    pub json_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set in .env file")]
    Missing(&'static str),

    #[error("{key} has an invalid value `{value}`")]
    Invalid { key: &'static str, value: String },
}

impl AppConfig {
    /// Reads the process environment. Call [`load_dotenv`] first to pick up `.env` files.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 5000u16)?;
        let json_limit = parse_or(&lookup, "JSON_LIMIT_BYTES", 64 * 1024usize)?;

        let backend = lookup("STORE_BACKEND").unwrap_or_else(|| "postgres".to_string());
        let store = match backend.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => {
                let url = lookup("DATABASE_URL")
                    .filter(|v| !v.trim().is_empty())
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?;

                StoreBackend::Postgres(DatabaseConfig {
                    url,
                    max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?,
                    min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", 1u32)?,
                    connect_timeout: Duration::from_secs(parse_or(
                        &lookup,
                        "DB_CONNECT_TIMEOUT_SECS",
                        5u64,
                    )?),
                    auto_migrate: parse_or(&lookup, "DB_AUTO_MIGRATE", false)?,
                })
            }
            "memory" => StoreBackend::Memory,
            _ => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: backend,
                })
            }
        };

        Ok(Self {
            host,
            port,
            store,
            json_limit,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

/// Environment loading: `.env.{RUST_ENV}` first, then fall back to `.env`.
pub fn load_dotenv() -> String {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    env
}
