//! Order placement (charge, then dispatch a courier).
//!
//! Business rules for turning a customer order into a delivery assignment,
//! implemented as deterministic orchestration over injected collaborators (no
//! HTTP, no storage, no real payment or courier clients).

pub mod courier;
pub mod eta;
pub mod in_memory;
pub mod order;
pub mod payment;
pub mod ports;
pub mod service;

pub use courier::{CourierAssignment, CourierRequest};
pub use eta::{BaseEta, EtaPolicy};
pub use order::Order;
pub use payment::{PaymentMethod, PaymentRequest, PaymentResult};
pub use ports::{CourierDispatcher, PaymentCharger};
pub use service::{OrderService, PlaceOrderError};

pub use fooddeliveryx_core::{CourierId, OrderId, PaymentRejected, TransactionId};
