//! API configuration from the environment.

use std::net::SocketAddr;

use billable_invoicing::{ConfigError, NumberPrefix};

pub const BIND_ADDR_VAR: &str = "BIND_ADDR";
pub const PREFIX_VAR: &str = "INVOICE_NUMBER_PREFIX";
pub const START_VAR: &str = "INVOICE_NUMBER_START";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Prefix of authority-issued numbers.
    pub prefix: NumberPrefix,
    /// First value the sequence hands out (seed after a restart).
    pub first_number: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            prefix: NumberPrefix::default(),
            first_number: 1,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                reason: format!("{e}"),
            })?;

        let prefix = match lookup(PREFIX_VAR) {
            Some(raw) => NumberPrefix::parse(&raw).map_err(|e| ConfigError::Invalid {
                var: PREFIX_VAR,
                reason: e.to_string(),
            })?,
            None => NumberPrefix::default(),
        };

        let first_number = match lookup(START_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: START_VAR,
                reason: format!("{e}"),
            })?,
            None => 1,
        };

        Ok(Self {
            bind_addr,
            prefix,
            first_number,
        })
    }
}
