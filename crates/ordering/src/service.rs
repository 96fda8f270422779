//! Order placement orchestration.
//!
//! ```text
//! Order
//!   ↓
//! 1. Charge payment (PaymentCharger)
//!   ↓
//! 2. Guard: absent or unsuccessful result → PaymentRejected, stop
//!   ↓
//! 3. Request courier (CourierDispatcher)
//!   ↓
//! 4. Adjust ETA (EtaPolicy)
//!   ↓
//! CourierAssignment
//! ```
//!
//! Collaborator failures are handed back to the caller untouched; the only
//! error raised here is [`PaymentRejected`].

use thiserror::Error;

use fooddeliveryx_core::PaymentRejected;

use crate::courier::{CourierAssignment, CourierRequest};
use crate::eta::{BaseEta, EtaPolicy};
use crate::order::Order;
use crate::payment::{PaymentMethod, PaymentRequest};
use crate::ports::{CourierDispatcher, PaymentCharger};

const NULL_RESULT_REASON: &str = "Payment result is null";
const DEFAULT_REJECTION_REASON: &str = "Payment rejected";

/// Failure of [`OrderService::place_order`].
///
/// `P` and `C` are the error types of the injected charger and dispatcher.
/// Their errors are carried as-is: `Display` and `source()` are forwarded.
#[derive(Debug, Error)]
pub enum PlaceOrderError<P, C> {
    /// Payment came back absent or unsuccessful. The courier was not contacted.
    #[error(transparent)]
    PaymentRejected(PaymentRejected),

    /// The payment charger failed the call. The courier was not contacted.
    #[error(transparent)]
    Payment(P),

    /// The courier dispatcher failed the call. Payment had already succeeded.
    #[error(transparent)]
    Courier(C),
}

impl<P, C> PlaceOrderError<P, C>
where
    P: std::error::Error + 'static,
{
    /// The payment rejection behind this failure, if payment was declined.
    ///
    /// Covers both a rejection raised here and a charger that declined by
    /// failing the call with a [`PaymentRejected`] somewhere in its source chain.
    pub fn payment_rejection(&self) -> Option<&PaymentRejected> {
        match self {
            PlaceOrderError::PaymentRejected(rejection) => Some(rejection),
            PlaceOrderError::Payment(err) => {
                let mut current = Some(err as &(dyn std::error::Error + 'static));
                while let Some(e) = current {
                    if let Some(rejection) = e.downcast_ref::<PaymentRejected>() {
                        return Some(rejection);
                    }
                    current = e.source();
                }
                None
            }
            PlaceOrderError::Courier(_) => None,
        }
    }

    /// Whether payment was declined (as opposed to a service being unavailable).
    pub fn is_payment_rejected(&self) -> bool {
        self.payment_rejection().is_some()
    }
}

/// Places orders: charges payment, then books a courier.
///
/// Stateless apart from its injected parts; `place_order` takes `&self`, so one
/// service can be shared by independent callers.
pub struct OrderService<P, C, E = BaseEta> {
    charger: P,
    dispatcher: C,
    eta_policy: E,
}

impl<P, C> OrderService<P, C, BaseEta> {
    /// Service reporting the dispatcher's ETA unchanged.
    pub fn new(charger: P, dispatcher: C) -> Self {
        Self::with_eta_policy(charger, dispatcher, BaseEta)
    }
}

impl<P, C, E> OrderService<P, C, E> {
    pub fn with_eta_policy(charger: P, dispatcher: C, eta_policy: E) -> Self {
        Self {
            charger,
            dispatcher,
            eta_policy,
        }
    }

    pub fn charger(&self) -> &P {
        &self.charger
    }

    pub fn dispatcher(&self) -> &C {
        &self.dispatcher
    }
}

impl<P, C, E> OrderService<P, C, E>
where
    P: PaymentCharger,
    C: CourierDispatcher,
    E: EtaPolicy,
{
    /// Charge the order and assign a courier to it.
    ///
    /// The charger is called exactly once. The dispatcher is called exactly
    /// once, and only after a successful charge.
    ///
    /// No compensation is attempted when dispatch fails after a successful
    /// charge: the customer stays charged and the dispatcher's error is
    /// returned as [`PlaceOrderError::Courier`].
    pub fn place_order(
        &self,
        order: &Order,
    ) -> Result<CourierAssignment, PlaceOrderError<P::Error, C::Error>> {
        let payment_request = PaymentRequest::new(
            order.id().clone(),
            order.total_amount(),
            PaymentMethod::Card,
        );

        let payment_result = self.charger.charge(payment_request).map_err(|e| {
            tracing::warn!(order_id = %order.id(), error = %e, "payment charger failed");
            PlaceOrderError::Payment(e)
        })?;

        let payment = match payment_result {
            None => return Err(reject(order, NULL_RESULT_REASON.to_string())),
            Some(result) if !result.success => {
                let reason = result
                    .message
                    .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());
                return Err(reject(order, reason));
            }
            Some(result) => result,
        };

        tracing::info!(
            order_id = %order.id(),
            transaction_id = ?payment.transaction_id,
            "payment charged"
        );

        let courier_request =
            CourierRequest::new(order.id().clone(), order.delivery_address());

        let assignment = self
            .dispatcher
            .request_courier(courier_request)
            .map_err(|e| {
                tracing::warn!(order_id = %order.id(), error = %e, "courier dispatch failed after payment");
                PlaceOrderError::Courier(e)
            })?;

        let eta_minutes = self.eta_policy.adjust(order, assignment.eta_minutes);

        tracing::info!(
            order_id = %order.id(),
            courier_id = %assignment.courier_id,
            base_eta_minutes = assignment.eta_minutes,
            eta_minutes,
            "courier assigned"
        );

        Ok(CourierAssignment::new(assignment.courier_id, eta_minutes))
    }
}

fn reject<P, C>(order: &Order, reason: String) -> PlaceOrderError<P, C> {
    tracing::warn!(order_id = %order.id(), reason = %reason, "payment rejected");
    PlaceOrderError::PaymentRejected(PaymentRejected::new(reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use rust_decimal::Decimal;

    use crate::in_memory::FakeFault;
    use crate::payment::PaymentResult;
    use crate::ports::{MockCourierDispatcher, MockPaymentCharger};

    fn valid_order() -> Order {
        Order::new(
            "O-1",
            vec!["Burger".to_string()],
            Decimal::new(25000, 0),
            "test@example.com",
            "Av. Siempre Viva 123",
        )
    }

    fn charger_returning(result: Option<PaymentResult>) -> MockPaymentCharger {
        let mut charger = MockPaymentCharger::new();
        charger
            .expect_charge()
            .times(1)
            .returning(move |_| Ok(result.clone()));
        charger
    }

    fn dispatcher_never_called() -> MockCourierDispatcher {
        let mut dispatcher = MockCourierDispatcher::new();
        dispatcher.expect_request_courier().never();
        dispatcher
    }

    #[test]
    fn requests_courier_when_payment_is_successful() {
        let order = valid_order();

        let mut charger = MockPaymentCharger::new();
        charger
            .expect_charge()
            .withf(|req| {
                req.order_id.as_str() == "O-1"
                    && req.amount == Decimal::new(25000, 0)
                    && req.method == PaymentMethod::Card
            })
            .times(1)
            .returning(|_| Ok(Some(PaymentResult::approved("TX-123", "OK"))));

        let mut dispatcher = MockCourierDispatcher::new();
        dispatcher
            .expect_request_courier()
            .withf(|req| req.order_id.as_str() == "O-1" && req.address == "Av. Siempre Viva 123")
            .times(1)
            .returning(|_| Ok(CourierAssignment::new("C-1", 12)));

        let service = OrderService::new(charger, dispatcher);
        let result = service.place_order(&order).unwrap();

        assert_eq!(result, CourierAssignment::new("C-1", 12));
    }

    #[test]
    fn charges_before_dispatching() {
        let mut seq = Sequence::new();

        let mut charger = MockPaymentCharger::new();
        charger
            .expect_charge()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(PaymentResult::approved("TX-1", "OK"))));

        let mut dispatcher = MockCourierDispatcher::new();
        dispatcher
            .expect_request_courier()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(CourierAssignment::new("C-1", 5)));

        OrderService::new(charger, dispatcher)
            .place_order(&valid_order())
            .unwrap();
    }

    #[test]
    fn absent_payment_result_is_rejected() {
        let service = OrderService::new(charger_returning(None), dispatcher_never_called());

        let err = service.place_order(&valid_order()).unwrap_err();
        match err {
            PlaceOrderError::PaymentRejected(r) if r.reason() == "Payment result is null" => {}
            other => panic!("Expected PaymentRejected for null result, got {other:?}"),
        }
    }

    #[test]
    fn unsuccessful_payment_uses_processor_message() {
        let declined = PaymentResult::declined(Some("Card expired".to_string()));
        let service =
            OrderService::new(charger_returning(Some(declined)), dispatcher_never_called());

        let err = service.place_order(&valid_order()).unwrap_err();
        assert!(err.is_payment_rejected());
        assert_eq!(err.to_string(), "Card expired");
    }

    #[test]
    fn unsuccessful_payment_without_message_uses_fallback() {
        let service = OrderService::new(
            charger_returning(Some(PaymentResult::declined(None))),
            dispatcher_never_called(),
        );

        let err = service.place_order(&valid_order()).unwrap_err();
        assert_eq!(
            err.payment_rejection().map(PaymentRejected::reason),
            Some("Payment rejected")
        );
    }

    #[test]
    fn success_flag_wins_over_transaction_id() {
        // A transaction id on a failed result does not make it a success.
        let odd = PaymentResult::new(false, Some("TX-5".into()), None);
        let service = OrderService::new(charger_returning(Some(odd)), dispatcher_never_called());

        assert!(service.place_order(&valid_order()).unwrap_err().is_payment_rejected());
    }

    #[test]
    fn charger_rejection_is_reported_as_payment_rejected() {
        let mut charger = MockPaymentCharger::new();
        charger
            .expect_charge()
            .times(1)
            .returning(|_| Err(FakeFault::rejected("Insufficient funds")));

        let service = OrderService::new(charger, dispatcher_never_called());
        let err = service.place_order(&valid_order()).unwrap_err();

        assert!(matches!(err, PlaceOrderError::Payment(FakeFault::Rejected(_))));
        assert!(err.is_payment_rejected());
        assert_eq!(
            err.payment_rejection().map(PaymentRejected::reason),
            Some("Insufficient funds")
        );
    }

    #[test]
    fn charger_fault_propagates_unchanged() {
        let mut charger = MockPaymentCharger::new();
        charger
            .expect_charge()
            .times(1)
            .returning(|_| Err(FakeFault::unavailable("gateway timeout")));

        let service = OrderService::new(charger, dispatcher_never_called());
        let err = service.place_order(&valid_order()).unwrap_err();

        assert!(!err.is_payment_rejected());
        match err {
            PlaceOrderError::Payment(e) => assert_eq!(e, FakeFault::unavailable("gateway timeout")),
            other => panic!("Expected charger fault, got {other:?}"),
        }
    }

    #[test]
    fn courier_error_propagates_after_single_charge() {
        let mut dispatcher = MockCourierDispatcher::new();
        dispatcher
            .expect_request_courier()
            .times(1)
            .returning(|_| Err(FakeFault::unavailable("No couriers")));

        let service = OrderService::new(
            charger_returning(Some(PaymentResult::approved("TX-1", "OK"))),
            dispatcher,
        );
        let err = service.place_order(&valid_order()).unwrap_err();

        assert_eq!(err.to_string(), "No couriers");
        assert!(!err.is_payment_rejected());
        match err {
            PlaceOrderError::Courier(e) => assert_eq!(e, FakeFault::unavailable("No couriers")),
            other => panic!("Expected courier fault, got {other:?}"),
        }
    }

    #[test]
    fn eta_policy_overrides_only_eta() {
        let mut dispatcher = MockCourierDispatcher::new();
        dispatcher
            .expect_request_courier()
            .times(1)
            .returning(|_| Ok(CourierAssignment::new("C-42", 12)));

        let forced = |order: &Order, base: u32| {
            assert_eq!(order.id().as_str(), "O-1");
            assert_eq!(base, 12);
            20
        };

        let service = OrderService::with_eta_policy(
            charger_returning(Some(PaymentResult::approved("TX-999", "OK"))),
            dispatcher,
            forced,
        );

        let result = service.place_order(&valid_order()).unwrap();
        assert_eq!(result.courier_id.as_str(), "C-42");
        assert_eq!(result.eta_minutes, 20);
    }
}
