//! Fixed-rate converter backed by a hand-curated rate table
//!
//! Models a small, deliberately narrow rate graph: only the directed pairs
//! wired in at construction (anchors, their algebraic inverses, and
//! explicitly derived cross rates) are reachable. There is no search across
//! the currency graph; an unseeded pair fails with
//! [`OutlayError::UnsupportedConversion`].

use super::CurrencyConverter;
use crate::error::{OutlayError, Result};
use crate::money::Currency;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Converter over a fixed set of directed rates.
///
/// # Example
/// ```
/// use outlay::convert::{CurrencyConverter, StaticRateConverter};
/// use outlay::money::Currency;
/// use rust_decimal_macros::dec;
///
/// let converter = StaticRateConverter::default_rates();
/// let rub = converter.convert(dec!(10), Currency::USD, Currency::RUB).unwrap();
/// assert_eq!(rub, dec!(920));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticRateConverter {
    rates: HashMap<(Currency, Currency), Decimal>,
}

impl StaticRateConverter {
    /// Create a converter with no rates wired in
    pub fn new() -> Self {
        Self::default()
    }

    /// The default hand-curated graph: USD↔RUB at 92, EUR↔RUB at 102, and
    /// the USD↔EUR crosses derived through RUB. TENGE is intentionally
    /// unreachable here.
    pub fn default_rates() -> Self {
        let usd_to_rub = dec!(92);
        let rub_to_usd = Decimal::ONE / usd_to_rub;
        let eur_to_rub = dec!(102);
        let rub_to_eur = Decimal::ONE / eur_to_rub;

        let mut rates = HashMap::new();
        rates.insert((Currency::USD, Currency::RUB), usd_to_rub);
        rates.insert((Currency::RUB, Currency::USD), rub_to_usd);
        rates.insert((Currency::EUR, Currency::RUB), eur_to_rub);
        rates.insert((Currency::RUB, Currency::EUR), rub_to_eur);
        rates.insert((Currency::USD, Currency::EUR), usd_to_rub * rub_to_eur);
        rates.insert((Currency::EUR, Currency::USD), eur_to_rub * rub_to_usd);

        Self { rates }
    }

    /// Wire in an anchor rate together with its algebraic inverse.
    ///
    /// Rejects non-positive rates; a zero rate would make the inverse
    /// undefined.
    pub fn anchor(&mut self, from: Currency, to: Currency, rate: Decimal) -> Result<()> {
        if rate <= Decimal::ZERO {
            return Err(OutlayError::DataSource(format!(
                "anchor rate for {}/{} must be positive, got {}",
                from, to, rate
            )));
        }
        self.rates.insert((from, to), rate);
        self.rates.insert((to, from), Decimal::ONE / rate);
        Ok(())
    }

    /// Derive a cross rate `from → to` through an intermediate currency,
    /// in both directions. Both legs must already be wired in.
    pub fn cross(&mut self, from: Currency, via: Currency, to: Currency) -> Result<()> {
        let first = self.rate(from, via)?;
        let second = self.rate(via, to)?;
        self.rates.insert((from, to), first * second);
        self.rates.insert((to, from), Decimal::ONE / (first * second));
        Ok(())
    }

    /// Whether a directed pair is reachable without conversion identity
    pub fn has_rate(&self, from: Currency, to: Currency) -> bool {
        from == to || self.rates.contains_key(&(from, to))
    }

    fn rate(&self, from: Currency, to: Currency) -> Result<Decimal> {
        self.rates
            .get(&(from, to))
            .copied()
            .ok_or(OutlayError::UnsupportedConversion { from, to })
    }
}

impl CurrencyConverter for StaticRateConverter {
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        // Same currency is always identity, no table entry required
        if from == to {
            return Ok(amount);
        }
        let rate = self.rate(from, to)?;
        log::trace!("static rate {}/{} = {}", from, to, rate);
        Ok(amount * rate)
    }
}
