//! Integration tests for the expense summary
//!
//! Exercise the full tracker → converter → summary flow and the laws the
//! summary guarantees.

use chrono::Duration;
use outlay::convert::StaticRateConverter;
use outlay::error::OutlayError;
use outlay::money::{Currency, MoneyValue};
use outlay::payment::{Payment, PaymentTracker};
use outlay::summary::ExpenseSummary;
use outlay::{presets, report};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_household_yearly_report_in_rub() {
    let mut tracker = PaymentTracker::new();
    tracker.add_payments(presets::household());

    let converter = StaticRateConverter::default_rates();
    let summary = ExpenseSummary::new(&tracker, &converter);
    let period = Duration::days(365);

    let charges = summary.charges(period, Currency::RUB).unwrap();
    assert_eq!(charges.len(), 7);

    // 10000×(365/30) + 7000×(365/7) + 500×365 + 3000×(365/30)
    //   + 100×365 + 5000×(365/30) + 3000×(365/30)
    let total = summary.total(period, Currency::RUB).unwrap();
    assert_eq!(total.amount.round_dp(2), dec!(839500.00));
    assert_eq!(total.currency, Currency::RUB);
}

#[test]
fn test_household_report_rendered() {
    let mut tracker = PaymentTracker::new();
    tracker.add_payments(presets::household());

    let converter = StaticRateConverter::default_rates();
    let summary = ExpenseSummary::new(&tracker, &converter);

    let charges = summary
        .charges(Duration::days(365), Currency::RUB)
        .unwrap();
    let sorted = report::sort_descending(&charges);

    // Groceries dominate: 7000 × (365/7) = 365,000
    assert_eq!(sorted[0].description, "Groceries");
    assert!(report::listing(&sorted).starts_with("365,000.00 RUB (Groceries)"));
}

#[test]
fn test_mixed_currency_subscriptions_in_usd() {
    let mut tracker = PaymentTracker::new();
    tracker.add_payments(presets::subscriptions());

    let converter = StaticRateConverter::default_rates();
    let summary = ExpenseSummary::new(&tracker, &converter);
    let period = Duration::days(30);

    let charges = summary.charges(period, Currency::USD).unwrap();
    let total = summary.total(period, Currency::USD).unwrap();

    let sum: Decimal = charges.iter().map(|c| c.money_value.amount).sum();
    assert_eq!(total.amount, sum);
    assert!(total.amount > Decimal::ZERO);
    assert!(charges.iter().all(|c| c.money_value.currency == Currency::USD));
}

#[test]
fn test_rent_and_coffee_known_total() {
    let mut tracker = PaymentTracker::new();
    tracker.add_payments(vec![
        Payment::recurring(
            "Rent",
            MoneyValue::new(dec!(10000), Currency::RUB),
            Duration::days(30),
        ),
        Payment::recurring(
            "Coffee",
            MoneyValue::new(dec!(500), Currency::RUB),
            Duration::days(1),
        ),
    ]);

    let converter = StaticRateConverter::default_rates();
    let summary = ExpenseSummary::new(&tracker, &converter);

    let total = summary
        .total(Duration::days(365), Currency::RUB)
        .unwrap();
    assert_eq!(total.amount.round_dp(2), dec!(304166.67));
}

#[test]
fn test_one_bad_payment_invalidates_the_report() {
    let mut tracker = PaymentTracker::new();
    tracker.add_payments(presets::household());
    tracker.add_payment(Payment::once(
        "Stranded",
        MoneyValue::new(dec!(100), Currency::TENGE),
    ));

    let converter = StaticRateConverter::default_rates();
    let summary = ExpenseSummary::new(&tracker, &converter);
    let period = Duration::days(365);

    assert!(matches!(
        summary.charges(period, Currency::RUB).unwrap_err(),
        OutlayError::UnsupportedConversion { .. }
    ));
    assert!(summary.total(period, Currency::RUB).is_err());
}

fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::RUB),
        Just(Currency::USD),
        Just(Currency::EUR),
    ]
}

fn amount_strategy() -> impl Strategy<Value = Decimal> {
    // Amounts up to ±10^7 with two decimal places
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn payment_strategy() -> impl Strategy<Value = Payment> {
    (
        "[a-z]{1,12}",
        amount_strategy(),
        currency_strategy(),
        proptest::option::of(1i64..400),
    )
        .prop_map(|(description, amount, currency, every_days)| Payment {
            description,
            money_value: MoneyValue::new(amount, currency),
            recurring_every: every_days.map(Duration::days),
        })
}

proptest! {
    #[test]
    fn prop_total_equals_sum_of_charges(
        payments in proptest::collection::vec(payment_strategy(), 1..20),
        period_days in 1i64..4000,
        target in currency_strategy(),
    ) {
        let mut tracker = PaymentTracker::new();
        tracker.add_payments(payments);

        let converter = StaticRateConverter::default_rates();
        let summary = ExpenseSummary::new(&tracker, &converter);
        let period = Duration::days(period_days);

        let charges = summary.charges(period, target).unwrap();
        let total = summary.total(period, target).unwrap();
        let sum: Decimal = charges.iter().map(|c| c.money_value.amount).sum();

        prop_assert_eq!(total.amount, sum);
        prop_assert_eq!(total.currency, target);
    }

    #[test]
    fn prop_one_off_payments_ignore_period_length(
        amount in amount_strategy(),
        currency in currency_strategy(),
        period_a in 1i64..4000,
        period_b in 1i64..4000,
    ) {
        let mut tracker = PaymentTracker::new();
        tracker.add_payment(Payment::once("once", MoneyValue::new(amount, currency)));

        let converter = StaticRateConverter::default_rates();
        let summary = ExpenseSummary::new(&tracker, &converter);

        let a = summary.total(Duration::days(period_a), currency).unwrap();
        let b = summary.total(Duration::days(period_b), currency).unwrap();
        prop_assert_eq!(a.amount, b.amount);
        prop_assert_eq!(a.amount, amount);
    }
}
