use serde::{Deserialize, Serialize};

use billable_invoicing::InvoiceNumber;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct TemporaryNumberQuery {
    pub prefix: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Wire shape consumed by `InvoiceNumberProvider`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceNumberResponse {
    pub invoice_number: InvoiceNumber,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporaryInvoiceNumberResponse {
    pub invoice_number: InvoiceNumber,
    pub temporary: bool,
}
