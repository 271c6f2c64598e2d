//! Currency and money value types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of currencies the system knows about.
///
/// Adding a currency means extending this enum and wiring rates for it into
/// whichever converter should support it; free-form codes are deliberately
/// not accepted so that table lookups and the same-currency identity stay
/// total over the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    RUB,
    USD,
    EUR,
    TENGE,
}

impl Currency {
    /// Get currency code as string
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::TENGE => "TENGE",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "₽",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::TENGE => "₸",
        }
    }

    /// Parse from code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "TENGE" => Some(Currency::TENGE),
            _ => None,
        }
    }

    /// All supported currencies
    pub fn all() -> &'static [Currency] {
        &[Currency::RUB, Currency::USD, Currency::EUR, Currency::TENGE]
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An immutable amount tagged with its currency.
///
/// There are no arithmetic operators on `MoneyValue`: combining two values
/// requires extracting `.amount` alongside explicit currency knowledge,
/// which keeps accidental cross-currency addition out of the type's reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoneyValue {
    pub amount: Decimal,
    pub currency: Currency,
}

impl MoneyValue {
    /// Create a new money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }
}

impl fmt::Display for MoneyValue {
    /// Fixed two decimal places, thousands-grouped, annotated with the
    /// currency code, e.g. `121,666.67 RUB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", group_thousands(self.amount), self.currency)
    }
}

/// Render a decimal rounded to two places with comma-grouped integer digits.
pub(crate) fn group_thousands(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let raw = format!("{:.2}", rounded);
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{}", sign, grouped, frac_part)
}
