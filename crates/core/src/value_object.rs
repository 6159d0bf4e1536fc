//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values,
/// e.g. the pricing of a product: two products priced `50000` at 50% off carry
/// equal pricing even though they are different products.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
