//! Payment records and the tracker that accumulates them

use crate::money::MoneyValue;
use chrono::Duration;
use serde::Serialize;
use std::fmt;

/// A resolved monetary line: already period-scaled and currency-converted.
///
/// Charges are produced by the summary computation; raw input lives in
/// [`Payment`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charge {
    pub description: String,
    pub money_value: MoneyValue,
}

impl Charge {
    pub fn new(description: impl Into<String>, money_value: MoneyValue) -> Self {
        Self {
            description: description.into(),
            money_value,
        }
    }
}

impl fmt::Display for Charge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.money_value, self.description)
    }
}

/// A recorded monetary obligation in its original currency.
///
/// `recurring_every: None` means the payment occurs exactly once, ever;
/// `Some(interval)` means it repeats at that interval.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub description: String,
    pub money_value: MoneyValue,
    pub recurring_every: Option<Duration>,
}

impl Payment {
    /// A one-off payment
    pub fn once(description: impl Into<String>, money_value: MoneyValue) -> Self {
        Self {
            description: description.into(),
            money_value,
            recurring_every: None,
        }
    }

    /// A payment repeating at a fixed interval
    pub fn recurring(
        description: impl Into<String>,
        money_value: MoneyValue,
        every: Duration,
    ) -> Self {
        Self {
            description: description.into(),
            money_value,
            recurring_every: Some(every),
        }
    }
}

/// Semantic alias for recurring payments; carries no extra behavior.
pub type Subscription = Payment;

/// Ordered, append-only collection of payments.
///
/// Insertion order is preserved and duplicates are allowed; there is no
/// identity key, removal, or validation here. The tracker lives for the
/// duration of one report run and is only read by the summary.
#[derive(Debug, Default)]
pub struct PaymentTracker {
    payments: Vec<Payment>,
}

impl PaymentTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single payment
    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Append payments in bulk, preserving their order
    pub fn add_payments(&mut self, payments: impl IntoIterator<Item = Payment>) {
        self.payments.extend(payments);
    }

    /// Read-only view of the full ordered sequence
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}
