//! # outlay
//!
//! A single-pass, in-memory report generator for recurring and one-off
//! monetary payments. Payments are normalized into a common currency over a
//! chosen reporting period and summed into per-payment charges plus a grand
//! total, with exact decimal arithmetic throughout.
//!
//! The interesting part is the summary computation: a payment recurring
//! every 30 days reported over a 365-day period contributes 365/30 ≈
//! 12.1667 occurrences — an exact fractional ratio, not a whole-occurrence
//! count — while one-off payments count exactly once whatever the period.
//!
//! ## Example
//!
//! ```rust
//! use chrono::Duration;
//! use outlay::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let mut tracker = PaymentTracker::new();
//! tracker.add_payment(Payment::recurring(
//!     "Rent",
//!     MoneyValue::new(dec!(10000), Currency::RUB),
//!     Duration::days(30),
//! ));
//!
//! let converter = StaticRateConverter::default_rates();
//! let summary = ExpenseSummary::new(&tracker, &converter);
//!
//! let total = summary.total(Duration::days(365), Currency::RUB)?;
//! println!("{}", total);
//! # Ok::<(), outlay::error::OutlayError>(())
//! ```

pub mod convert;
pub mod error;
pub mod money;
pub mod payment;
pub mod presets;
pub mod report;
pub mod summary;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::convert::{
        CurrencyConverter, ReferenceRateConverter, ReferenceRateFeed, StaticRateConverter,
    };
    pub use crate::error::{OutlayError, Result};
    pub use crate::money::{Currency, MoneyValue};
    pub use crate::payment::{Charge, Payment, PaymentTracker, Subscription};
    pub use crate::summary::ExpenseSummary;
}
