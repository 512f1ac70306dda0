//! Invoice numbering.
//!
//! - `number`: value types and the local (temporary / fallback) generators
//! - `provider`: HTTP client for the remote authority, falling back locally
//! - `sequence`: the authority's own monotonically increasing counter
//! - `config`: environment-driven provider configuration

pub mod config;
pub mod number;
pub mod provider;
pub mod sequence;

pub use config::{ConfigError, ProviderConfig};
pub use number::{
    DEFAULT_PREFIX, InvoiceNumber, NumberPrefix, fallback_invoice_number,
    generate_temporary_invoice_number, temporary_invoice_number,
};
pub use provider::{
    FetchError, InvoiceNumberProvider, IssuedInvoiceNumber, Provenance, ProviderError,
};
pub use sequence::InvoiceNumberSequence;
