//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. An invoice number
/// such as `INV-0000042` is one: two numbers with the same text are the same
/// number, wherever they came from. To "change" one, build a new one.
///
/// The trait requires:
/// - **Clone**: values are copied freely
/// - **PartialEq**: compared by attribute values
/// - **Debug**: visible in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
