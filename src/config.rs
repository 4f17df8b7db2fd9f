// src/config.rs
use std::net::IpAddr;
use std::str::FromStr;

use crate::month::UnknownMonthPolicy;
use crate::seed::SeedMode;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://database.db";
pub const DEFAULT_SEED_URL: &str = "https://s3.amazonaws.com/roxiler.com/product_transaction.json";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub unknown_month: UnknownMonthPolicy,
    pub seed_url: String,
    pub seed_mode: SeedMode,
    pub seed_reset: bool,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: parse_or("HOST", lookup("HOST"), IpAddr::from([127, 0, 0, 1])),
            port: parse_or("PORT", lookup("PORT"), DEFAULT_PORT),
            unknown_month: parse_or("UNKNOWN_MONTH", lookup("UNKNOWN_MONTH"), UnknownMonthPolicy::default()),
            seed_url: lookup("SEED_URL").unwrap_or_else(|| DEFAULT_SEED_URL.to_string()),
            seed_mode: parse_or("SEED_MODE", lookup("SEED_MODE"), SeedMode::default()),
            seed_reset: parse_or("SEED_RESET", lookup("SEED_RESET"), false),
        }
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(key, %value, error = %e, "Invalid config value, using default");
                default
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = config_from(&[]);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.unknown_month, UnknownMonthPolicy::Fallback);
        assert_eq!(config.seed_url, DEFAULT_SEED_URL);
        assert_eq!(config.seed_mode, SeedMode::Atomic);
        assert!(!config.seed_reset);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("DATABASE_URL", "sqlite://other.db"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("UNKNOWN_MONTH", "no-match"),
            ("SEED_MODE", "best-effort"),
            ("SEED_RESET", "true"),
        ]);
        assert_eq!(config.database_url, "sqlite://other.db");
        assert_eq!(config.host.to_string(), "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.unknown_month, UnknownMonthPolicy::NoMatch);
        assert_eq!(config.seed_mode, SeedMode::BestEffort);
        assert!(config.seed_reset);
    }

    #[test]
    fn malformed_values_fall_back() {
        let config = config_from(&[("PORT", "not-a-port"), ("HOST", "localhost:1"), ("SEED_MODE", "yolo")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.host.to_string(), "127.0.0.1");
        assert_eq!(config.seed_mode, SeedMode::Atomic);
    }
}
