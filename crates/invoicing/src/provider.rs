//! Client for the remote invoice-number authority, with local fallback.
//!
//! The authority answers `GET /api/invoice-number` with
//! `{ "invoiceNumber": "<string>" }`. Any failure on the way (transport,
//! non-2xx status, malformed body, schema mismatch) is treated as "authority
//! unavailable": it is logged and replaced by [`fallback_invoice_number`], so
//! invoice creation never blocks on the network.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::ProviderConfig;
use crate::number::{InvoiceNumber, fallback_invoice_number};

/// Largest authority response body read before giving up.
pub const MAX_RESPONSE_BYTES: usize = 4 * 1024;

/// Errors constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid authority url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("failed to build http client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Why the authority could not supply a number.
///
/// Every variant means the same thing to callers of
/// [`InvoiceNumberProvider::fetch_unique_invoice_number`]: fall back.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to invoice number authority failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invoice number authority responded with HTTP {0}")]
    Status(u16),

    #[error("invoice number response is not valid json: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("invoice number response does not match schema: {0}")]
    Schema(String),

    #[error("invoice number response exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

/// Where an issued number came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Issued by the remote authority (unique as far as it guarantees).
    Authoritative,
    /// Synthesised locally after the authority failed; may collide.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedInvoiceNumber {
    pub number: InvoiceNumber,
    pub provenance: Provenance,
}

impl IssuedInvoiceNumber {
    pub fn is_authoritative(&self) -> bool {
        self.provenance == Provenance::Authoritative
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InvoiceNumberResponse {
    invoice_number: String,
}

#[derive(Debug, Clone)]
pub struct InvoiceNumberProvider {
    url: Url,
    client: reqwest::Client,
}

impl InvoiceNumberProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let url = Url::parse(&config.base_url)?.join(&config.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { url, client })
    }

    /// Fully resolved authority URL.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Authority-issued number, or a local fallback if the authority fails.
    ///
    /// Never fails. Use [`fetch_with_provenance`](Self::fetch_with_provenance)
    /// to tell the two apart.
    pub async fn fetch_unique_invoice_number(&self) -> InvoiceNumber {
        self.fetch_with_provenance().await.number
    }

    pub async fn fetch_with_provenance(&self) -> IssuedInvoiceNumber {
        match self.try_fetch().await {
            Ok(number) => IssuedInvoiceNumber {
                number,
                provenance: Provenance::Authoritative,
            },
            Err(e) => {
                let number = fallback_invoice_number();
                tracing::warn!(
                    error = %e,
                    url = %self.url,
                    fallback = %number,
                    "invoice number authority unavailable; using local fallback"
                );
                IssuedInvoiceNumber {
                    number,
                    provenance: Provenance::Fallback,
                }
            }
        }
    }

    /// Single request to the authority, with no fallback.
    pub async fn try_fetch(&self) -> Result<InvoiceNumber, FetchError> {
        let resp = self.client.get(self.url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = read_capped(resp, MAX_RESPONSE_BYTES).await?;
        parse_response(&body)
    }
}

/// Read the body chunk by chunk, stopping as soon as it passes `limit`.
async fn read_capped(mut resp: reqwest::Response, limit: usize) -> Result<Vec<u8>, FetchError> {
    if resp.content_length().is_some_and(|len| len > limit as u64) {
        return Err(FetchError::BodyTooLarge { limit });
    }

    let mut body = Vec::new();
    while let Some(chunk) = resp.chunk().await? {
        if body.len() + chunk.len() > limit {
            return Err(FetchError::BodyTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Decode and validate an authority response body.
fn parse_response(body: &[u8]) -> Result<InvoiceNumber, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body).map_err(FetchError::Decode)?;
    if !value.is_object() {
        return Err(FetchError::Schema("expected a json object".to_string()));
    }
    let parsed: InvoiceNumberResponse =
        serde_json::from_value(value).map_err(|e| FetchError::Schema(e.to_string()))?;

    if parsed.invoice_number.is_empty() {
        return Err(FetchError::Schema("invoiceNumber is empty".to_string()));
    }

    Ok(InvoiceNumber::new(parsed.invoice_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verbatim_value() {
        let n = parse_response(br#"{"invoiceNumber":"X-123"}"#).unwrap();
        assert_eq!(n.as_str(), "X-123");
    }

    #[test]
    fn ignores_unknown_fields() {
        let n = parse_response(br#"{"invoiceNumber":"INV-0000009","issuedAt":"now"}"#).unwrap();
        assert_eq!(n.as_str(), "INV-0000009");
    }

    #[test]
    fn non_json_is_a_decode_error() {
        let err = parse_response(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn schema_mismatches_are_rejected() {
        let bodies: [&[u8]; 6] = [
            br#"{}"#,
            br#"{"invoiceNumber":42}"#,
            br#"{"invoiceNumber":null}"#,
            br#"{"invoice_number":"INV-1"}"#,
            br#"["INV-1"]"#,
            br#"{"invoiceNumber":""}"#,
        ];
        for body in bodies {
            let err = parse_response(body).unwrap_err();
            assert!(
                matches!(err, FetchError::Schema(_)),
                "expected schema error for {}",
                String::from_utf8_lossy(body)
            );
        }
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let err = InvoiceNumberProvider::new(ProviderConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidUrl(_)));
    }

    #[test]
    fn joins_endpoint_onto_origin() {
        let provider =
            InvoiceNumberProvider::new(ProviderConfig::new("http://127.0.0.1:8080")).unwrap();
        assert_eq!(provider.url().as_str(), "http://127.0.0.1:8080/api/invoice-number");
    }

    #[test]
    fn provenance_flag() {
        let issued = IssuedInvoiceNumber {
            number: InvoiceNumber::new("INV-0000001"),
            provenance: Provenance::Authoritative,
        };
        assert!(issued.is_authoritative());

        let issued = IssuedInvoiceNumber {
            provenance: Provenance::Fallback,
            ..issued
        };
        assert!(!issued.is_authoritative());
    }
}
