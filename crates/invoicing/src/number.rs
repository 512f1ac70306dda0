//! Invoice number value types and the purely local generators.
//!
//! Two generators live here, neither of which does IO:
//! - temporary numbers for drafts/previews (`<prefix>` + 7 random digits)
//! - fallback numbers used when the remote authority is unreachable
//!   (`INV-` + last 5 digits of the Unix millisecond clock + 2 random digits)
//!
//! Neither is globally unique. Callers that need uniqueness go through
//! [`crate::InvoiceNumberProvider`].

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

use billable_core::{DomainError, DomainResult, ValueObject};

/// Prefix used when none is configured.
pub const DEFAULT_PREFIX: &str = "INV-";

/// Longest prefix accepted by [`NumberPrefix::parse`].
pub const MAX_PREFIX_LEN: usize = 32;

const TEMPORARY_DIGITS_MODULUS: u32 = 10_000_000;
const FALLBACK_CLOCK_MODULUS: i64 = 100_000;
const FALLBACK_RANDOM_MODULUS: u32 = 100;

/// A human-facing invoice identifier, `<prefix><digits>`.
///
/// Numbers received from the authority are carried verbatim; no format check
/// is applied beyond "non-empty string".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceNumber(String);

impl InvoiceNumber {
    /// Wrap an already formatted number.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl ValueObject for InvoiceNumber {}

impl core::fmt::Display for InvoiceNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for InvoiceNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<InvoiceNumber> for String {
    fn from(value: InvoiceNumber) -> Self {
        value.0
    }
}

/// The textual part placed in front of the digits of an invoice number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumberPrefix(String);

impl NumberPrefix {
    /// Accept any prefix as-is (temporary numbers work with arbitrary text).
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Validated constructor for prefixes that end up in issued numbers.
    ///
    /// Rejects prefixes longer than [`MAX_PREFIX_LEN`] characters, prefixes
    /// containing whitespace or control characters, and prefixes ending in an
    /// ASCII digit (the prefix/digits boundary would be ambiguous).
    pub fn parse(value: &str) -> DomainResult<Self> {
        if value.chars().count() > MAX_PREFIX_LEN {
            return Err(DomainError::validation(format!(
                "prefix longer than {MAX_PREFIX_LEN} characters"
            )));
        }
        if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(DomainError::validation(
                "prefix must not contain whitespace or control characters",
            ));
        }
        if value.chars().last().is_some_and(|c| c.is_ascii_digit()) {
            return Err(DomainError::validation("prefix must not end with a digit"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for NumberPrefix {
    fn default() -> Self {
        Self(DEFAULT_PREFIX.to_string())
    }
}

impl ValueObject for NumberPrefix {}

impl core::fmt::Display for NumberPrefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Temporary number with the default `INV-` prefix.
pub fn temporary_invoice_number() -> InvoiceNumber {
    generate_temporary_invoice_number(&NumberPrefix::default())
}

/// `<prefix>` followed by a zero-padded random integer in `[0, 9_999_999]`.
///
/// For drafts and previews; replace with an authority-issued number before
/// persisting.
pub fn generate_temporary_invoice_number(prefix: &NumberPrefix) -> InvoiceNumber {
    generate_temporary_invoice_number_with_rng(prefix, &mut rand::thread_rng())
}

pub fn generate_temporary_invoice_number_with_rng<R: Rng + ?Sized>(
    prefix: &NumberPrefix,
    rng: &mut R,
) -> InvoiceNumber {
    let n = rng.gen_range(0..TEMPORARY_DIGITS_MODULUS);
    InvoiceNumber(format!("{}{:07}", prefix.as_str(), n))
}

/// Local stand-in for an authority-issued number, using the current clock.
pub fn fallback_invoice_number() -> InvoiceNumber {
    fallback_invoice_number_at(Utc::now().timestamp_millis(), &mut rand::thread_rng())
}

/// `INV-` + last 5 digits of `unix_millis` + 2 random digits.
///
/// Two calls in the same millisecond collide with probability 1/100.
pub fn fallback_invoice_number_at<R: Rng + ?Sized>(unix_millis: i64, rng: &mut R) -> InvoiceNumber {
    let clock = unix_millis.rem_euclid(FALLBACK_CLOCK_MODULUS);
    let salt = rng.gen_range(0..FALLBACK_RANDOM_MODULUS);
    InvoiceNumber(format!("{DEFAULT_PREFIX}{clock:05}{salt:02}"))
}
