//! In-memory collaborators.
//!
//! Scripted payment charger and courier dispatcher that answer every call the
//! same way and record the requests they receive. Intended for tests/dev
//! wiring; there is no network or storage behind them.

use std::sync::Mutex;

use thiserror::Error;

use fooddeliveryx_core::{CourierId, PaymentRejected, TransactionId};

use crate::courier::{CourierAssignment, CourierRequest};
use crate::payment::{PaymentRequest, PaymentResult};
use crate::ports::{CourierDispatcher, PaymentCharger};

/// Failure signalled by an in-memory collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FakeFault {
    /// The collaborator declined on its own, by failing the call.
    #[error("{0}")]
    Rejected(#[source] PaymentRejected),
    /// The collaborator is down or has nothing to offer.
    #[error("{0}")]
    Unavailable(String),
}

impl FakeFault {
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(PaymentRejected::new(reason))
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

/// Append to a call log, recovering the data if a panicking test poisoned it.
fn record<T>(log: &Mutex<Vec<T>>, item: T) {
    log.lock().unwrap_or_else(|e| e.into_inner()).push(item);
}

fn snapshot<T: Clone>(log: &Mutex<Vec<T>>) -> Vec<T> {
    log.lock().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Payment charger that replays one scripted outcome.
#[derive(Debug)]
pub struct ScriptedCharger {
    outcome: Result<Option<PaymentResult>, FakeFault>,
    requests: Mutex<Vec<PaymentRequest>>,
}

impl ScriptedCharger {
    pub fn new(outcome: Result<Option<PaymentResult>, FakeFault>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every charge succeeds with the given transaction id.
    pub fn approving(transaction_id: impl Into<TransactionId>) -> Self {
        Self::new(Ok(Some(PaymentResult::approved(transaction_id, "OK"))))
    }

    /// Every charge comes back unsuccessful.
    pub fn declining(message: Option<&str>) -> Self {
        Self::new(Ok(Some(PaymentResult::declined(message.map(str::to_string)))))
    }

    /// The processor answers with no result at all.
    pub fn silent() -> Self {
        Self::new(Ok(None))
    }

    /// The charger fails the call with a payment rejection.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self::new(Err(FakeFault::rejected(reason)))
    }

    /// The charger fails the call with a service fault.
    pub fn failing(msg: impl Into<String>) -> Self {
        Self::new(Err(FakeFault::unavailable(msg)))
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<PaymentRequest> {
        snapshot(&self.requests)
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl PaymentCharger for ScriptedCharger {
    type Error = FakeFault;

    fn charge(&self, request: PaymentRequest) -> Result<Option<PaymentResult>, Self::Error> {
        record(&self.requests, request);
        self.outcome.clone()
    }
}

/// Courier dispatcher that replays one scripted outcome.
#[derive(Debug)]
pub struct ScriptedDispatcher {
    outcome: Result<CourierAssignment, FakeFault>,
    requests: Mutex<Vec<CourierRequest>>,
}

impl ScriptedDispatcher {
    pub fn new(outcome: Result<CourierAssignment, FakeFault>) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn assigning(courier_id: impl Into<CourierId>, eta_minutes: u32) -> Self {
        Self::new(Ok(CourierAssignment::new(courier_id, eta_minutes)))
    }

    pub fn failing(msg: impl Into<String>) -> Self {
        Self::new(Err(FakeFault::unavailable(msg)))
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CourierRequest> {
        snapshot(&self.requests)
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap_or_else(|e| e.into_inner()).len()
    }
}

impl CourierDispatcher for ScriptedDispatcher {
    type Error = FakeFault;

    fn request_courier(&self, request: CourierRequest) -> Result<CourierAssignment, Self::Error> {
        record(&self.requests, request);
        self.outcome.clone()
    }
}
