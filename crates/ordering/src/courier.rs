use serde::{Deserialize, Serialize};

use fooddeliveryx_core::{CourierId, OrderId, ValueObject};

/// Request for a courier to deliver an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierRequest {
    pub order_id: OrderId,
    pub address: String,
}

impl CourierRequest {
    pub fn new(order_id: OrderId, address: impl Into<String>) -> Self {
        Self {
            order_id,
            address: address.into(),
        }
    }
}

impl ValueObject for CourierRequest {}

/// Courier assigned to an order and the expected delivery time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourierAssignment {
    pub courier_id: CourierId,
    pub eta_minutes: u32,
}

impl CourierAssignment {
    pub fn new(courier_id: impl Into<CourierId>, eta_minutes: u32) -> Self {
        Self {
            courier_id: courier_id.into(),
            eta_minutes,
        }
    }
}

impl ValueObject for CourierAssignment {}
