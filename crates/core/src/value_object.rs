//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: a quantity of
/// `4` equals any other quantity of `4`, and a batch is nothing more than its
/// quantity and expiration date. To "modify" one, build a new one.
///
/// The trait requires:
/// - **Clone**: values are copied, never shared by reference
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
