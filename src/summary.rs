//! Expense summary: recurrence normalization over a reporting period
//!
//! For each tracked payment the summary works out how many times it occurs
//! within the reporting period, converts its native amount into the target
//! currency, and scales it. One-off payments (no recurrence interval) count
//! exactly once whatever the period length — they are reported at full face
//! value, never pro-rated. Recurring payments contribute an exact decimal
//! ratio `period / interval`, so an interval that does not evenly divide
//! the period yields a fractional occurrence count (365d / 30d = 12.1666…):
//! the summary reports an expected rate-adjusted spend, not a simulated
//! occurrence count.

use crate::convert::CurrencyConverter;
use crate::error::{OutlayError, Result};
use crate::money::{Currency, MoneyValue};
use crate::payment::{Charge, Payment, PaymentTracker};
use chrono::Duration;
use rust_decimal::Decimal;

/// Computes per-payment normalized charges and their aggregate total.
///
/// Borrows the tracker and a converter for the duration of one report; the
/// tracker is only read, never mutated.
///
/// # Example
/// ```
/// use chrono::Duration;
/// use outlay::convert::StaticRateConverter;
/// use outlay::money::{Currency, MoneyValue};
/// use outlay::payment::{Payment, PaymentTracker};
/// use outlay::summary::ExpenseSummary;
/// use rust_decimal_macros::dec;
///
/// let mut tracker = PaymentTracker::new();
/// tracker.add_payment(Payment::recurring(
///     "Coffee",
///     MoneyValue::new(dec!(500), Currency::RUB),
///     Duration::days(1),
/// ));
///
/// let converter = StaticRateConverter::default_rates();
/// let summary = ExpenseSummary::new(&tracker, &converter);
/// let total = summary.total(Duration::days(365), Currency::RUB).unwrap();
/// assert_eq!(total.amount, dec!(182500));
/// ```
pub struct ExpenseSummary<'a> {
    tracker: &'a PaymentTracker,
    converter: &'a dyn CurrencyConverter,
}

impl<'a> ExpenseSummary<'a> {
    pub fn new(tracker: &'a PaymentTracker, converter: &'a dyn CurrencyConverter) -> Self {
        Self { tracker, converter }
    }

    /// Per-payment charges for the period, converted into `currency`, in
    /// tracker order. Sorting is a presentation concern and happens
    /// elsewhere.
    ///
    /// Any conversion failure or invalid recurrence aborts the whole call;
    /// no partial list is ever returned.
    pub fn charges(&self, period: Duration, currency: Currency) -> Result<Vec<Charge>> {
        self.tracker
            .payments()
            .iter()
            .map(|payment| self.charge_for(payment, period, currency))
            .collect()
    }

    /// Exact sum of all per-payment scaled and converted amounts, in the
    /// target currency.
    ///
    /// Computed through the same per-payment path as [`charges`], so the
    /// total always equals the sum of the individual charge amounts
    /// decimal-exactly.
    ///
    /// [`charges`]: ExpenseSummary::charges
    pub fn total(&self, period: Duration, currency: Currency) -> Result<MoneyValue> {
        let amount = self
            .charges(period, currency)?
            .iter()
            .fold(Decimal::ZERO, |acc, charge| acc + charge.money_value.amount);
        Ok(MoneyValue::new(amount, currency))
    }

    fn charge_for(
        &self,
        payment: &Payment,
        period: Duration,
        currency: Currency,
    ) -> Result<Charge> {
        let times = recurrence_times(payment, period)?;
        let converted = self.converter.convert(
            payment.money_value.amount,
            payment.money_value.currency,
            currency,
        )?;
        log::debug!(
            "\"{}\": {} × {} occurrences",
            payment.description,
            converted,
            times
        );
        Ok(Charge::new(
            payment.description.clone(),
            MoneyValue::new(converted * times, currency),
        ))
    }
}

/// Exact occurrence ratio of a payment within a reporting period.
///
/// One-off payments occur exactly once regardless of the period. Recurring
/// payments contribute `period / interval` as an exact decimal ratio,
/// derived from whole milliseconds of both durations. A zero or negative
/// interval is rejected rather than silently producing an unbounded count.
fn recurrence_times(payment: &Payment, period: Duration) -> Result<Decimal> {
    match payment.recurring_every {
        None => Ok(Decimal::ONE),
        Some(every) => {
            let interval_ms = every.num_milliseconds();
            if interval_ms <= 0 {
                return Err(OutlayError::InvalidRecurrence {
                    description: payment.description.clone(),
                });
            }
            Ok(Decimal::from(period.num_milliseconds()) / Decimal::from(interval_ms))
        }
    }
}
