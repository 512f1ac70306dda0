//! Authority-side invoice number sequence.
//!
//! Backs `GET /api/invoice-number`: a lock-free monotonically increasing
//! counter rendered as `<prefix><zero-padded n>`. Uniqueness holds within one
//! process; across restarts the caller seeds it via [`InvoiceNumberSequence::starting_at`].

use std::sync::atomic::{AtomicU64, Ordering};

use billable_core::{DomainError, DomainResult};

use crate::number::{InvoiceNumber, NumberPrefix};

/// Default zero-padding width of the numeric part.
pub const DEFAULT_WIDTH: usize = 7;

#[derive(Debug)]
pub struct InvoiceNumberSequence {
    prefix: NumberPrefix,
    width: usize,
    next: AtomicU64,
}

impl InvoiceNumberSequence {
    /// Sequence with prefix `INV-`, width 7, starting at 1.
    pub fn new() -> Self {
        Self::with_prefix(NumberPrefix::default())
    }

    pub fn with_prefix(prefix: NumberPrefix) -> Self {
        Self {
            prefix,
            width: DEFAULT_WIDTH,
            next: AtomicU64::new(1),
        }
    }

    /// Set the first value handed out by [`next`](Self::next).
    pub fn starting_at(self, first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
            ..self
        }
    }

    /// Minimum number of digits; wider values are not truncated.
    pub fn with_width(self, width: usize) -> Self {
        Self { width, ..self }
    }

    pub fn prefix(&self) -> &NumberPrefix {
        &self.prefix
    }

    /// Issue the next number.
    ///
    /// Fails once the counter has reached `u64::MAX` instead of wrapping.
    pub fn next(&self) -> DomainResult<InvoiceNumber> {
        let n = self
            .next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| DomainError::invariant("invoice number sequence exhausted"))?;

        let number = self.render(n);
        tracing::debug!(invoice_number = %number, "issued invoice number");
        Ok(number)
    }

    /// The number [`next`](Self::next) would issue, without consuming it.
    pub fn peek(&self) -> InvoiceNumber {
        self.render(self.next.load(Ordering::SeqCst))
    }

    fn render(&self, n: u64) -> InvoiceNumber {
        InvoiceNumber::new(format!(
            "{}{:0width$}",
            self.prefix.as_str(),
            n,
            width = self.width
        ))
    }
}

impl Default for InvoiceNumberSequence {
    fn default() -> Self {
        Self::new()
    }
}
