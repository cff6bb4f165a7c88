//! Runtime settings for the grid and its order store.
//!
//! Defaults match a stock installation: no table prefix, orders in
//! `sales_order`, every status counted, pages of 20. [`GridConfig::from_env`]
//! overrides them from `ORDERS_COUNT_*` variables; the struct also
//! deserializes with serde for hosts that keep settings in a file.

use crate::model::OrderStatus;
use crate::store::ORDERS_TABLE;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const ENV_TABLE_PREFIX: &str = "ORDERS_COUNT_TABLE_PREFIX";
pub const ENV_ORDERS_TABLE: &str = "ORDERS_COUNT_ORDERS_TABLE";
pub const ENV_STATUSES: &str = "ORDERS_COUNT_STATUSES";
pub const ENV_PAGE_SIZE: &str = "ORDERS_COUNT_PAGE_SIZE";
pub const ENV_BUFFER_SIZE: &str = "ORDERS_COUNT_BUFFER_SIZE";
pub const ENV_QUERY_TIMEOUT_MS: &str = "ORDERS_COUNT_QUERY_TIMEOUT_MS";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Prepended to logical table names.
    pub table_prefix: String,
    /// Logical name of the orders table.
    pub orders_table: String,
    /// Statuses included in `orders_count`; empty counts every order.
    pub counted_statuses: Vec<OrderStatus>,
    pub page_size: usize,
    /// Request channel capacity of each actor.
    pub buffer_size: usize,
    pub query_timeout_ms: Option<u64>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            table_prefix: String::new(),
            orders_table: ORDERS_TABLE.to_string(),
            counted_statuses: Vec::new(),
            page_size: 20,
            buffer_size: 32,
            query_timeout_ms: None,
        }
    }
}

impl GridConfig {
    /// Defaults overlaid with whichever `ORDERS_COUNT_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(prefix) = lookup(ENV_TABLE_PREFIX) {
            config.table_prefix = prefix.trim().to_string();
        }
        if let Some(table) = lookup(ENV_ORDERS_TABLE) {
            let table = table.trim();
            if table.is_empty() {
                return Err(invalid(ENV_ORDERS_TABLE, table, "must not be empty"));
            }
            config.orders_table = table.to_string();
        }
        if let Some(raw) = lookup(ENV_STATUSES) {
            config.counted_statuses = raw
                .split(',')
                .filter(|part| !part.trim().is_empty())
                .map(|part| part.parse().map_err(|e: String| invalid(ENV_STATUSES, &raw, e)))
                .collect::<Result<_, _>>()?;
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            config.page_size = parse_number(ENV_PAGE_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_BUFFER_SIZE) {
            config.buffer_size = parse_number(ENV_BUFFER_SIZE, &raw)?;
        }
        if let Some(raw) = lookup(ENV_QUERY_TIMEOUT_MS) {
            config.query_timeout_ms = Some(parse_number(ENV_QUERY_TIMEOUT_MS, &raw)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Page and buffer sizes must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(invalid(ENV_PAGE_SIZE, "0", "must be greater than zero"));
        }
        if self.buffer_size == 0 {
            return Err(invalid(ENV_BUFFER_SIZE, "0", "must be greater than zero"));
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Option<Duration> {
        self.query_timeout_ms.map(Duration::from_millis)
    }
}

fn parse_number<N: std::str::FromStr>(key: &'static str, raw: &str) -> Result<N, ConfigError>
where
    N::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e: N::Err| invalid(key, raw, e.to_string()))
}

fn invalid(key: &'static str, value: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.into(),
    }
}
