//! Value object trait: equality by value, not identity.
//!
//! Requests and results exchanged with the payment and courier collaborators
//! are value objects. They are built per call, never persisted, and two of
//! them with the same fields are interchangeable.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. For example the orchestrator never edits the dispatcher's
/// assignment; it builds a fresh assignment carrying the adjusted ETA.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct CourierRequest {
///     order_id: OrderId,
///     address: String,
/// }
///
/// impl ValueObject for CourierRequest {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
