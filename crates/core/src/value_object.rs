//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are interchangeable. In the catalog these are the selection pieces
/// the host passes around by value (category filters, page sizes, whole
/// selections).
///
/// The trait requires:
/// - **Clone**: values are copied into each recomputation, never shared mutably
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: shows up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
