use billable_core::DomainResult;
use billable_invoicing::{
    InvoiceNumber, InvoiceNumberSequence, NumberPrefix, generate_temporary_invoice_number,
};

use crate::config::ApiConfig;

/// Shared state behind the invoice-number routes.
#[derive(Debug)]
pub struct AppServices {
    sequence: InvoiceNumberSequence,
}

impl AppServices {
    pub fn from_config(config: &ApiConfig) -> Self {
        let sequence = InvoiceNumberSequence::with_prefix(config.prefix.clone())
            .starting_at(config.first_number);
        Self { sequence }
    }

    pub fn next_invoice_number(&self) -> DomainResult<InvoiceNumber> {
        self.sequence.next()
    }

    /// Draft number; `prefix` defaults to `INV-` and must pass [`NumberPrefix::parse`].
    pub fn temporary_invoice_number(&self, prefix: Option<&str>) -> DomainResult<InvoiceNumber> {
        let prefix = match prefix {
            Some(p) => NumberPrefix::parse(p)?,
            None => NumberPrefix::default(),
        };
        Ok(generate_temporary_invoice_number(&prefix))
    }
}
