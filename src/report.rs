//! Presentation helpers for charge listings
//!
//! Everything here consumes [`Charge`] sequences produced by the summary
//! and renders plain text; nothing feeds back into the core computation.
//! Charges arrive in tracker order and are sorted for display here, not in
//! the summary.

use crate::money::{group_thousands, MoneyValue};
use crate::payment::Charge;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt::Write;

/// Bar glyph shared by both charts
const BAR: char = '█';

/// Charges sorted descending by amount; ties keep their original order.
pub fn sort_descending(charges: &[Charge]) -> Vec<Charge> {
    let mut sorted = charges.to_vec();
    sorted.sort_by(|a, b| b.money_value.amount.cmp(&a.money_value.amount));
    sorted
}

/// One line per charge: `121,666.67 RUB (Rent)`.
pub fn listing(charges: &[Charge]) -> String {
    let mut out = String::new();
    for charge in charges {
        let _ = writeln!(out, "{}", charge);
    }
    out
}

/// Grand total line: `total: 304,166.67 RUB`.
pub fn total_line(total: &MoneyValue) -> String {
    format!("total: {}", total)
}

/// Proportion chart: each charge's share of the combined positive total,
/// as a horizontal bar plus a percentage.
///
/// Charges with non-positive amounts render with an empty bar; when the
/// total itself is non-positive there is nothing to apportion and every
/// bar is empty.
pub fn proportion_chart(charges: &[Charge], width: usize) -> String {
    let total: Decimal = charges
        .iter()
        .map(|c| c.money_value.amount)
        .filter(|a| *a > Decimal::ZERO)
        .sum();
    let label_width = description_width(charges);

    let mut out = String::new();
    for charge in charges {
        let share = if total > Decimal::ZERO && charge.money_value.amount > Decimal::ZERO {
            (charge.money_value.amount / total)
                .to_f64()
                .unwrap_or(0.0)
        } else {
            0.0
        };
        let filled = (share * width as f64).round() as usize;
        let _ = writeln!(
            out,
            "{:<label_width$}  {:<width$} {:>5.1}%",
            charge.description,
            BAR.to_string().repeat(filled),
            share * 100.0,
        );
    }
    out
}

/// Categorical horizontal bar chart scaled to the largest charge, with a
/// currency-symbol-prefixed value axis label per bar.
pub fn bar_chart(charges: &[Charge], width: usize) -> String {
    let max = charges
        .iter()
        .map(|c| c.money_value.amount)
        .max()
        .unwrap_or(Decimal::ZERO);
    let label_width = description_width(charges);

    let mut out = String::new();
    for charge in charges {
        let amount = charge.money_value.amount;
        let filled = if max > Decimal::ZERO && amount > Decimal::ZERO {
            ((amount / max).to_f64().unwrap_or(0.0) * width as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "{:<label_width$}  {:<width$} {}{}",
            charge.description,
            BAR.to_string().repeat(filled),
            charge.money_value.currency.symbol(),
            group_thousands(amount),
        );
    }
    out
}

fn description_width(charges: &[Charge]) -> usize {
    charges
        .iter()
        .map(|c| c.description.chars().count())
        .max()
        .unwrap_or(0)
}
