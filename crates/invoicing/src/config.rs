//! Provider configuration (environment-driven).

use std::time::Duration;

use thiserror::Error;

/// Path of the authority endpoint, relative to its origin.
pub const DEFAULT_ENDPOINT: &str = "/api/invoice-number";

pub const AUTHORITY_URL_VAR: &str = "INVOICE_NUMBER_AUTHORITY_URL";
pub const TIMEOUT_MS_VAR: &str = "INVOICE_NUMBER_TIMEOUT_MS";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Where and how [`crate::InvoiceNumberProvider`] reaches the authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Origin of the authority, e.g. `http://127.0.0.1:8080`.
    pub base_url: String,
    pub endpoint: String,
    /// `None` means no client-side deadline.
    pub timeout: Option<Duration>,
}

impl ProviderConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Read `INVOICE_NUMBER_AUTHORITY_URL` and `INVOICE_NUMBER_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(AUTHORITY_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(AUTHORITY_URL_VAR))?;

        let mut config = Self::new(base_url.trim());

        if let Some(raw) = lookup(TIMEOUT_MS_VAR) {
            let ms: u64 = raw.trim().parse().map_err(|e| ConfigError::Invalid {
                var: TIMEOUT_MS_VAR,
                reason: format!("{e}"),
            })?;
            config.timeout = Some(Duration::from_millis(ms));
        }

        Ok(config)
    }
}
