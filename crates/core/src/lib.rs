//! `fooddeliveryx-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod value_object;

pub use error::PaymentRejected;
pub use id::{CourierId, OrderId, TransactionId};
pub use value_object::ValueObject;
