//! Converter backed by a daily reference-rate CSV dataset
//!
//! The dataset is a delimited file with one `Date` column and one column
//! per currency code, each cell quoting that day's rate against a EUR
//! anchor (the layout of the ECB `eurofxref` feed). `N/A` and empty cells
//! mean the currency was not quoted that day.
//!
//! [`ReferenceRateConverter`] is pinned to one fixed historical date at
//! construction; reports are always computed against that single snapshot,
//! never against wall-clock "now".

use super::CurrencyConverter;
use crate::error::{OutlayError, Result};
use crate::money::Currency;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Parsed reference-rate dataset: per-day EUR-anchored quotes.
#[derive(Debug, Clone)]
pub struct ReferenceRateFeed {
    quotes: BTreeMap<NaiveDate, HashMap<Currency, Decimal>>,
}

impl ReferenceRateFeed {
    /// Load a feed from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            OutlayError::DataSource(format!("cannot open rate dataset {}: {}", path.display(), e))
        })?;
        let feed = Self::from_reader(file)?;
        log::debug!(
            "loaded rate dataset {} ({} quoted days)",
            path.display(),
            feed.num_days()
        );
        Ok(feed)
    }

    /// Load a feed from any CSV source
    pub fn from_reader(reader: impl io::Read) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        // Header: first column is the date, the rest are currency codes.
        // Columns for currencies outside the closed Currency set are kept
        // out of the table entirely.
        let headers = csv_reader.headers()?.clone();
        let columns: Vec<(usize, Currency)> = headers
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(idx, code)| Currency::from_code(code).map(|c| (idx, c)))
            .collect();

        let mut quotes = BTreeMap::new();
        for (row_num, record) in csv_reader.records().enumerate() {
            let record = record?;
            let raw_date = record.get(0).unwrap_or_default();
            if raw_date.is_empty() {
                continue;
            }
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|e| {
                OutlayError::DataSource(format!(
                    "invalid date \"{}\" at dataset row {}: {}",
                    raw_date,
                    row_num + 1,
                    e
                ))
            })?;

            let mut day = HashMap::new();
            for &(idx, currency) in &columns {
                let cell = record.get(idx).unwrap_or_default();
                if cell.is_empty() || cell.eq_ignore_ascii_case("N/A") {
                    continue;
                }
                let rate = Decimal::from_str(cell).map_err(|e| {
                    OutlayError::DataSource(format!(
                        "invalid rate \"{}\" for {} at dataset row {}: {}",
                        cell,
                        currency,
                        row_num + 1,
                        e
                    ))
                })?;
                if rate <= Decimal::ZERO {
                    return Err(OutlayError::DataSource(format!(
                        "non-positive rate {} for {} at dataset row {}",
                        rate,
                        currency,
                        row_num + 1
                    )));
                }
                day.insert(currency, rate);
            }
            quotes.insert(date, day);
        }

        Ok(Self { quotes })
    }

    /// Number of quoted days in the dataset
    pub fn num_days(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the dataset quotes any rates for a date
    pub fn has_date(&self, date: NaiveDate) -> bool {
        self.quotes.contains_key(&date)
    }

    /// Rate from one currency to another on a given date, derived from the
    /// EUR-anchored quotes: `rate(from → to) = (EUR→to) / (EUR→from)`.
    pub fn rate(&self, date: NaiveDate, from: Currency, to: Currency) -> Result<Decimal> {
        if from == to {
            return Ok(Decimal::ONE);
        }
        let day = self.quotes.get(&date).ok_or_else(|| {
            OutlayError::DataSource(format!("rate dataset has no quotes for {}", date))
        })?;
        let eur_to_target = self.anchor_quote(day, date, to)?;
        let eur_to_source = self.anchor_quote(day, date, from)?;
        Ok(eur_to_target / eur_to_source)
    }

    fn anchor_quote(
        &self,
        day: &HashMap<Currency, Decimal>,
        date: NaiveDate,
        currency: Currency,
    ) -> Result<Decimal> {
        if currency == Currency::EUR {
            return Ok(Decimal::ONE);
        }
        day.get(&currency).copied().ok_or_else(|| {
            OutlayError::DataSource(format!(
                "rate dataset has no {} quote on {}",
                currency, date
            ))
        })
    }
}

/// Converter over a [`ReferenceRateFeed`] pinned to one historical date.
#[derive(Debug)]
pub struct ReferenceRateConverter {
    feed: ReferenceRateFeed,
    pinned_date: NaiveDate,
}

impl ReferenceRateConverter {
    /// Pin a feed to a fixed date. Fails fast if the dataset does not
    /// quote that date at all.
    pub fn new(feed: ReferenceRateFeed, pinned_date: NaiveDate) -> Result<Self> {
        if !feed.has_date(pinned_date) {
            return Err(OutlayError::DataSource(format!(
                "rate dataset has no quotes for {}",
                pinned_date
            )));
        }
        Ok(Self { feed, pinned_date })
    }

    /// Convenience: load the dataset from disk and pin it in one step
    pub fn from_path(path: impl AsRef<Path>, pinned_date: NaiveDate) -> Result<Self> {
        Self::new(ReferenceRateFeed::from_path(path)?, pinned_date)
    }

    /// The date every conversion is computed against
    pub fn pinned_date(&self) -> NaiveDate {
        self.pinned_date
    }
}

impl CurrencyConverter for ReferenceRateConverter {
    fn convert(&self, amount: Decimal, from: Currency, to: Currency) -> Result<Decimal> {
        // Identity holds even for currencies the dataset never quotes
        if from == to {
            return Ok(amount);
        }
        let rate = self.feed.rate(self.pinned_date, from, to)?;
        log::trace!("reference rate {}/{} @ {} = {}", from, to, self.pinned_date, rate);
        Ok(amount * rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "\
Date,USD,JPY,RUB,GBP
2024-10-04,1.1029,164.03,105.50,0.8398
2024-10-03,1.1008,163.90,N/A,0.8401
";

    fn feed() -> ReferenceRateFeed {
        ReferenceRateFeed::from_reader(SAMPLE.as_bytes()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_loads_known_currencies_only() {
        let feed = feed();
        assert_eq!(feed.num_days(), 2);
        // JPY and GBP columns are outside the closed currency set and are
        // not loaded; USD and RUB are.
        assert!(feed.rate(date(2024, 10, 4), Currency::EUR, Currency::USD).is_ok());
        assert!(feed.rate(date(2024, 10, 4), Currency::EUR, Currency::RUB).is_ok());
    }

    #[test]
    fn test_eur_anchor_quote() {
        let feed = feed();
        let rate = feed
            .rate(date(2024, 10, 4), Currency::EUR, Currency::USD)
            .unwrap();
        assert_eq!(rate, dec!(1.1029));
    }

    #[test]
    fn test_cross_rate_through_anchor() {
        let feed = feed();
        // USD → RUB = (EUR→RUB) / (EUR→USD) = 105.50 / 1.1029
        let rate = feed
            .rate(date(2024, 10, 4), Currency::USD, Currency::RUB)
            .unwrap();
        assert_eq!(rate.round_dp(4), dec!(95.6569));
    }

    #[test]
    fn test_missing_date_fails() {
        let feed = feed();
        let err = feed
            .rate(date(2024, 10, 5), Currency::EUR, Currency::USD)
            .unwrap_err();
        assert!(matches!(err, OutlayError::DataSource(_)));
    }

    #[test]
    fn test_not_quoted_cell_fails() {
        let feed = feed();
        // RUB is N/A on 2024-10-03
        let err = feed
            .rate(date(2024, 10, 3), Currency::EUR, Currency::RUB)
            .unwrap_err();
        assert!(matches!(err, OutlayError::DataSource(_)));
    }

    #[test]
    fn test_unsupported_currency_fails() {
        let feed = feed();
        let err = feed
            .rate(date(2024, 10, 4), Currency::TENGE, Currency::EUR)
            .unwrap_err();
        assert!(matches!(err, OutlayError::DataSource(_)));
    }

    #[test]
    fn test_pinned_converter_identity() {
        let converter = ReferenceRateConverter::new(feed(), date(2024, 10, 4)).unwrap();
        // Identity short-circuit works even for a currency the dataset
        // never quotes.
        let amount = dec!(777.77);
        assert_eq!(
            converter
                .convert(amount, Currency::TENGE, Currency::TENGE)
                .unwrap(),
            amount
        );
    }

    #[test]
    fn test_pinned_converter_conversion() {
        let converter = ReferenceRateConverter::new(feed(), date(2024, 10, 4)).unwrap();
        let usd = converter
            .convert(dec!(100), Currency::EUR, Currency::USD)
            .unwrap();
        assert_eq!(usd, dec!(110.29));
    }

    #[test]
    fn test_pin_to_unquoted_date_fails_fast() {
        let err = ReferenceRateConverter::new(feed(), date(2020, 1, 1)).unwrap_err();
        assert!(matches!(err, OutlayError::DataSource(_)));
    }

    #[test]
    fn test_malformed_rate_cell() {
        let bad = "Date,USD\n2024-10-04,not-a-number\n";
        let err = ReferenceRateFeed::from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, OutlayError::DataSource(_)));
    }

    #[test]
    fn test_non_positive_rate_rejected() {
        let bad = "Date,USD\n2024-10-04,0\n";
        let err = ReferenceRateFeed::from_reader(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, OutlayError::DataSource(_)));
    }
}
