use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use fooddeliveryx_core::{OrderId, TransactionId, ValueObject};

/// Payment method tag sent to the charger.
///
/// Only card payments exist today; every order is charged with [`PaymentMethod::Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[default]
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "CARD",
        }
    }
}

impl core::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request to charge an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub order_id: OrderId,
    pub amount: Decimal,
    pub method: PaymentMethod,
}

impl PaymentRequest {
    pub fn new(order_id: OrderId, amount: Decimal, method: PaymentMethod) -> Self {
        Self {
            order_id,
            amount,
            method,
        }
    }
}

impl ValueObject for PaymentRequest {}

/// Outcome reported by the payment charger.
///
/// Fields are public because the charger is an untrusted collaborator: any
/// combination may arrive and the orchestrator only trusts `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentResult {
    pub success: bool,
    /// Present only when the charge went through.
    pub transaction_id: Option<TransactionId>,
    pub message: Option<String>,
}

impl PaymentResult {
    pub fn new(
        success: bool,
        transaction_id: Option<TransactionId>,
        message: Option<String>,
    ) -> Self {
        Self {
            success,
            transaction_id,
            message,
        }
    }

    pub fn approved(transaction_id: impl Into<TransactionId>, message: impl Into<String>) -> Self {
        Self::new(true, Some(transaction_id.into()), Some(message.into()))
    }

    pub fn declined(message: Option<String>) -> Self {
        Self::new(false, None, message)
    }
}

impl ValueObject for PaymentResult {}
