//! Example payment datasets
//!
//! Two interchangeable starting points for reports. Callers inject one of
//! these (or their own list) into a [`PaymentTracker`] at startup; nothing
//! here is process-wide state.
//!
//! [`PaymentTracker`]: crate::payment::PaymentTracker

use crate::money::{Currency, MoneyValue};
use crate::payment::{Payment, Subscription};
use chrono::Duration;
use rust_decimal_macros::dec;

/// A household budget: recurring ruble expenses.
pub fn household() -> Vec<Payment> {
    vec![
        Payment::recurring(
            "Utility payments",
            MoneyValue::new(dec!(10000), Currency::RUB),
            Duration::days(30),
        ),
        Payment::recurring(
            "Groceries",
            MoneyValue::new(dec!(7000), Currency::RUB),
            Duration::days(7),
        ),
        Payment::recurring(
            "Entertainment",
            MoneyValue::new(dec!(500), Currency::RUB),
            Duration::days(1),
        ),
        Payment::recurring(
            "Debt",
            MoneyValue::new(dec!(3000), Currency::RUB),
            Duration::days(30),
        ),
        Payment::recurring(
            "Public transport",
            MoneyValue::new(dec!(100), Currency::RUB),
            Duration::days(1),
        ),
        Payment::recurring(
            "Communication",
            MoneyValue::new(dec!(5000), Currency::RUB),
            Duration::days(30),
        ),
        Payment::recurring(
            "Gym",
            MoneyValue::new(dec!(3000), Currency::RUB),
            Duration::days(30),
        ),
    ]
}

/// Mixed-currency digital services plus a one-off purchase.
pub fn subscriptions() -> Vec<Payment> {
    vec![
        Subscription::recurring(
            "Music streaming",
            MoneyValue::new(dec!(10.99), Currency::USD),
            Duration::days(30),
        ),
        Subscription::recurring(
            "Cloud storage",
            MoneyValue::new(dec!(1.99), Currency::EUR),
            Duration::days(30),
        ),
        Subscription::recurring(
            "VPN",
            MoneyValue::new(dec!(4.49), Currency::USD),
            Duration::days(30),
        ),
        Payment::once(
            "Lifetime license",
            MoneyValue::new(dec!(59), Currency::EUR),
        ),
    ]
}
