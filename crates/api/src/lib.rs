//! HTTP API: the invoice-number authority and its supporting endpoints.

pub mod app;
pub mod config;

pub use config::ApiConfig;
