//! Currency conversion capability
//!
//! Two interchangeable implementations of [`CurrencyConverter`]:
//!
//! - **static_table**: a hand-curated directed rate graph fixed at
//!   construction, for reports that should not depend on external data.
//! - **reference_feed**: rates read from a daily reference-rate CSV
//!   dataset, pinned to one historical date.

pub mod reference_feed;
pub mod static_table;

pub use reference_feed::{ReferenceRateConverter, ReferenceRateFeed};
pub use static_table::StaticRateConverter;

use crate::error::Result;
use crate::money::{Currency, MoneyValue};
use rust_decimal::Decimal;

/// Capability for converting an amount between two currencies.
///
/// Implementations must return `amount` unchanged when `from == to`, even
/// when no self-pair rate is configured anywhere (identity law). Converters
/// are immutable once constructed, so one instance may serve any number of
/// conversions during a report.
pub trait CurrencyConverter: Send + Sync {
    /// Convert `amount` from one currency to another.
    ///
    /// Returns the converted amount such that
    /// `to_amount = from_amount * rate(from, to)`.
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal>;

    /// Convert a [`MoneyValue`] into the target currency.
    fn convert_money(&self, money: &MoneyValue, to: Currency) -> Result<MoneyValue> {
        Ok(MoneyValue::new(
            self.convert(money.amount, money.currency, to)?,
            to,
        ))
    }
}
