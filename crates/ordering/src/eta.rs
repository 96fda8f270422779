//! Delivery ETA adjustment.
//!
//! The dispatcher's ETA is passed through an [`EtaPolicy`] before it reaches
//! the caller. The policy is the single extension point of order placement:
//! surge padding, order-size padding and test overrides all plug in here
//! without touching the charge/dispatch steps.

use crate::order::Order;

/// Pure function of (order, base ETA) to the ETA reported to the caller.
///
/// Implementations must not have side effects; they may be called from several
/// threads at once when the service is shared.
pub trait EtaPolicy: Send + Sync {
    fn adjust(&self, order: &Order, base_eta_minutes: u32) -> u32;
}

/// Default policy: reports the dispatcher's ETA unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseEta;

impl EtaPolicy for BaseEta {
    fn adjust(&self, _order: &Order, base_eta_minutes: u32) -> u32 {
        base_eta_minutes
    }
}

impl<F> EtaPolicy for F
where
    F: Fn(&Order, u32) -> u32 + Send + Sync,
{
    fn adjust(&self, order: &Order, base_eta_minutes: u32) -> u32 {
        self(order, base_eta_minutes)
    }
}
