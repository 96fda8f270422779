use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fooddeliveryx_core::OrderId;

/// Customer order to be fulfilled.
///
/// Built by order intake and consumed read-only here; fields are private so an
/// order cannot change once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    items: Vec<String>,
    total_amount: Decimal,
    customer_email: String,
    delivery_address: String,
}

impl Order {
    pub fn new(
        id: impl Into<OrderId>,
        items: Vec<String>,
        total_amount: Decimal,
        customer_email: impl Into<String>,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            items,
            total_amount,
            customer_email: customer_email.into(),
            delivery_address: delivery_address.into(),
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Item names, in the order the customer added them.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Exact amount to charge, in currency units.
    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }

    pub fn customer_email(&self) -> &str {
        &self.customer_email
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }
}
