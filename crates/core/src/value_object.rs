//! Value object trait: equality by value, not identity.
//!
//! A good carries nothing but its name, so two goods with the same name are
//! the same good. Withdrawing a unit therefore hands back a freshly built
//! value rather than the instance that was delivered.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**:
///
/// - **Value Object**: no identity (`Good("IPhone 12") == Good("IPhone 12")`)
/// - **Entity**: has identity (two orders with equal contents are still two orders)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Good {
///     name: String,
/// }
///
/// impl ValueObject for Good {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
