use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::domain::inventory::InventoryRecord;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_ORDER_PORT: u16 = 8081;
const DEFAULT_INVENTORY_PORT: u16 = 8082;
const DEFAULT_INVENTORY_URL: &str = "http://localhost:8082";
const DEFAULT_INVENTORY_TIMEOUT_MS: u64 = 3000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>, default_port: u16) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => default_port,
        };
        Ok(Self {
            database_url,
            host,
            port,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderServiceConfig {
    pub server: ServerConfig,
    pub inventory_url: String,
    pub inventory_timeout: Duration,
}

impl OrderServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server = ServerConfig::from_lookup(&lookup, DEFAULT_ORDER_PORT)?;
        let inventory_url =
            lookup("INVENTORY_SERVICE_URL").unwrap_or_else(|| DEFAULT_INVENTORY_URL.to_string());
        let timeout_ms = match lookup("INVENTORY_TIMEOUT_MS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError::Invalid {
                        name: "INVENTORY_TIMEOUT_MS",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Ok(ms) => ms,
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "INVENTORY_TIMEOUT_MS",
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_INVENTORY_TIMEOUT_MS,
        };
        Ok(Self {
            server,
            inventory_url,
            inventory_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryServiceConfig {
    pub server: ServerConfig,
    /// Records upserted at startup, from `INVENTORY_SEED=sku=qty,sku=qty`.
    pub seed: Vec<InventoryRecord>,
}

impl InventoryServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let server = ServerConfig::from_lookup(&lookup, DEFAULT_INVENTORY_PORT)?;
        let seed = match lookup("INVENTORY_SEED") {
            Some(raw) => parse_seed(&raw)?,
            None => vec![],
        };
        Ok(Self { server, seed })
    }
}

fn parse_seed(raw: &str) -> Result<Vec<InventoryRecord>, ConfigError> {
    let invalid = |entry: &str, reason: &str| ConfigError::Invalid {
        name: "INVENTORY_SEED",
        value: entry.to_string(),
        reason: reason.to_string(),
    };

    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (sku, quantity) = entry
                .split_once('=')
                .ok_or_else(|| invalid(entry, "expected sku=quantity"))?;
            let sku = sku.trim();
            if sku.is_empty() {
                return Err(invalid(entry, "sku must not be blank"));
            }
            let quantity: i32 = quantity
                .trim()
                .parse()
                .map_err(|_| invalid(entry, "quantity must be an integer"))?;
            if quantity < 0 {
                return Err(invalid(entry, "quantity must not be negative"));
            }
            Ok(InventoryRecord {
                sku_code: sku.to_string(),
                quantity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn order_config_defaults() {
        let config = OrderServiceConfig::from_lookup(lookup(&[("DATABASE_URL", "postgres://db")])).unwrap();

        assert_eq!(config.server.database_url, "postgres://db");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.inventory_url, "http://localhost:8082");
        assert_eq!(config.inventory_timeout, Duration::from_millis(3000));
    }

    #[test]
    fn database_url_is_required() {
        let err = OrderServiceConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    }

    #[test]
    fn invalid_port_is_reported() {
        let err = InventoryServiceConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = OrderServiceConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("INVENTORY_TIMEOUT_MS", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "INVENTORY_TIMEOUT_MS", .. }));
    }

    #[test]
    fn inventory_seed_is_parsed() {
        let config = InventoryServiceConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "postgres://db"),
            ("INVENTORY_SEED", "iphone_15=100, iphone_15_red=0,"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8082);
        assert_eq!(
            config.seed,
            vec![
                InventoryRecord {
                    sku_code: "iphone_15".to_string(),
                    quantity: 100,
                },
                InventoryRecord {
                    sku_code: "iphone_15_red".to_string(),
                    quantity: 0,
                },
            ]
        );
    }

    #[test]
    fn malformed_seed_entries_are_rejected() {
        assert!(parse_seed("iphone_15").is_err());
        assert!(parse_seed("=5").is_err());
        assert!(parse_seed("iphone_15=-1").is_err());
        assert!(parse_seed("iphone_15=lots").is_err());
    }
}
