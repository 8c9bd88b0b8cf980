//! Value object trait: equality by value, not identity.
//!
//! Everything the invoice core handles is a value object: an order is built once
//! per invoice, never mutated, and two orders with the same fields render the
//! same invoice.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// The trait requires:
/// - **Clone**: values are passed around freely (orders into plans, plans into renderers)
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: helpful for logging and test failures
///
/// ```ignore
/// use storefront_core::{Amount, ValueObject};
///
/// let a = Amount::from_paise(15_000);
/// let b = Amount::from_rupees(150.0)?;
/// assert_eq!(a, b);  // Equal by value
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
