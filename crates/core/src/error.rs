//! Domain error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payment was declined or could not be resolved.
///
/// This is a business-rule rejection, not an infrastructure fault. It is
/// terminal for the order being placed and is never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{reason}")]
pub struct PaymentRejected {
    reason: String,
}

impl PaymentRejected {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
