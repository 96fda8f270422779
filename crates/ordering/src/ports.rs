//! Capability ports for the collaborators order placement depends on.
//!
//! Real payment processors and courier networks live outside this crate. Any
//! implementation (network client, in-memory fake, recorded fixture) can be
//! injected into [`crate::OrderService`]. Timeouts and retries, if any, are the
//! implementation's business.

use crate::courier::{CourierAssignment, CourierRequest};
use crate::payment::{PaymentRequest, PaymentResult};

/// Attempts to collect payment for an order.
#[cfg_attr(test, mockall::automock(type Error = crate::in_memory::FakeFault;))]
pub trait PaymentCharger: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Charge the requested amount.
    ///
    /// `Ok(None)` means the processor gave no answer; callers treat it as a
    /// rejection. An `Err` is a fault of the charger itself.
    fn charge(&self, request: PaymentRequest) -> Result<Option<PaymentResult>, Self::Error>;
}

/// Assigns a delivery courier to an order.
#[cfg_attr(test, mockall::automock(type Error = crate::in_memory::FakeFault;))]
pub trait CourierDispatcher: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn request_courier(&self, request: CourierRequest) -> Result<CourierAssignment, Self::Error>;
}
