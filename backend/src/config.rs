//! Runtime configuration read from `ORDERS_*` environment variables.

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;

use crate::domain::validators::{MAX_AGE, MIN_AGE};
use crate::domain::OrderMode;

pub const DATABASE_URL_VAR: &str = "ORDERS_DATABASE_URL";
pub const BIND_ADDR_VAR: &str = "ORDERS_BIND_ADDR";
pub const CLIENT_MIN_AGE_VAR: &str = "ORDERS_CLIENT_MIN_AGE";
pub const CLIENT_MAX_AGE_VAR: &str = "ORDERS_CLIENT_MAX_AGE";
pub const ATOMIC_ORDERS_VAR: &str = "ORDERS_ATOMIC_ORDERS";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub client_min_age: i32,
    pub client_max_age: i32,
    pub order_mode: OrderMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:orders.db".to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            client_min_age: MIN_AGE,
            client_max_age: MAX_AGE,
            order_mode: OrderMode::PerStatement,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from `lookup`, falling back to defaults for unset keys.
    /// Values that are set but don't parse are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let database_url = lookup(DATABASE_URL_VAR).unwrap_or(defaults.database_url);

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("{} is not a socket address: {}", BIND_ADDR_VAR, raw))?,
            None => defaults.bind_addr,
        };

        let client_min_age = parse_age(&lookup, CLIENT_MIN_AGE_VAR, defaults.client_min_age)?;
        let client_max_age = parse_age(&lookup, CLIENT_MAX_AGE_VAR, defaults.client_max_age)?;
        if client_min_age > client_max_age {
            bail!(
                "{} ({}) is greater than {} ({})",
                CLIENT_MIN_AGE_VAR,
                client_min_age,
                CLIENT_MAX_AGE_VAR,
                client_max_age
            );
        }

        let order_mode = match lookup(ATOMIC_ORDERS_VAR).as_deref().map(str::trim) {
            None => defaults.order_mode,
            Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => OrderMode::Atomic,
            Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => OrderMode::PerStatement,
            Some(v) => bail!("{} must be true or false, got: {}", ATOMIC_ORDERS_VAR, v),
        };

        Ok(Self {
            database_url,
            bind_addr,
            client_min_age,
            client_max_age,
            order_mode,
        })
    }
}

fn parse_age<F>(lookup: &F, key: &str, default: i32) -> Result<i32>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is not an integer: {}", key, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.database_url, "sqlite:orders.db");
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!((config.client_min_age, config.client_max_age), (7, 30));
        assert_eq!(config.order_mode, OrderMode::PerStatement);
    }

    #[test]
    fn test_every_variable_is_read() {
        let config = config_from(&[
            (DATABASE_URL_VAR, "sqlite:/tmp/shop.db"),
            (BIND_ADDR_VAR, "0.0.0.0:8081"),
            (CLIENT_MIN_AGE_VAR, "18"),
            (CLIENT_MAX_AGE_VAR, "99"),
            (ATOMIC_ORDERS_VAR, "TRUE"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "sqlite:/tmp/shop.db");
        assert_eq!(config.bind_addr.port(), 8081);
        assert_eq!((config.client_min_age, config.client_max_age), (18, 99));
        assert_eq!(config.order_mode, OrderMode::Atomic);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        assert!(config_from(&[(BIND_ADDR_VAR, "localhost")]).is_err());
        assert!(config_from(&[(CLIENT_MIN_AGE_VAR, "seven")]).is_err());
        assert!(config_from(&[(ATOMIC_ORDERS_VAR, "sometimes")]).is_err());
    }

    #[test]
    fn test_inverted_age_range_is_an_error() {
        let err = config_from(&[(CLIENT_MIN_AGE_VAR, "40")]).unwrap_err();
        assert!(err.to_string().contains("is greater than"));
    }
}
