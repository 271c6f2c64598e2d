//! outlay CLI - expense reports from the command line
//!
//! Populates a payment tracker from one of the bundled datasets, runs the
//! summary against the chosen rate source, and prints charges sorted
//! descending by amount followed by the grand total.
//!
//! ## Example Usage
//!
//! ```bash
//! # Yearly household report in rubles against the built-in rate table
//! outlay
//!
//! # Monthly subscription report in euros, with charts
//! outlay --dataset subscriptions --period-days 30 --currency EUR --charts
//!
//! # Use a daily reference-rate dataset pinned to a date
//! outlay --source feed --feed eurofxref.csv --date 2024-10-04
//!
//! # Machine-readable output
//! outlay --format json
//! ```

use chrono::{Duration, NaiveDate};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use outlay::convert::{CurrencyConverter, ReferenceRateConverter, StaticRateConverter};
use outlay::error::Result;
use outlay::money::Currency;
use outlay::payment::PaymentTracker;
use outlay::summary::ExpenseSummary;
use outlay::{presets, report};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

/// outlay: recurring-expense report generator
#[derive(Parser)]
#[command(name = "outlay")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Normalize recurring payments into one currency over a reporting period", long_about = None)]
struct Cli {
    /// Payment dataset to report on
    #[arg(short = 'd', long, value_enum, default_value_t = Dataset::Household)]
    dataset: Dataset,

    /// Rate source for currency conversion
    #[arg(short = 's', long, value_enum, default_value_t = RateSource::Static)]
    source: RateSource,

    /// Reference-rate CSV dataset (used with --source feed)
    #[arg(long, default_value = "eurofxref.csv")]
    feed: PathBuf,

    /// Historical date the feed conversion is pinned to (YYYY-MM-DD)
    #[arg(long, default_value = "2024-10-04")]
    date: NaiveDate,

    /// Reporting period in days
    #[arg(short = 'p', long, default_value_t = 365)]
    period_days: u32,

    /// Target currency for the report
    #[arg(short = 'c', long, default_value = "RUB", value_parser = parse_currency)]
    currency: Currency,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Render proportion and bar charts after the listing
    #[arg(long)]
    charts: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Dataset {
    Household,
    Subscriptions,
}

#[derive(Clone, Copy, ValueEnum)]
enum RateSource {
    /// Built-in fixed rate table
    Static,
    /// Daily reference-rate CSV dataset pinned to --date
    Feed,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_currency(code: &str) -> std::result::Result<Currency, String> {
    Currency::from_code(code).ok_or_else(|| {
        format!(
            "unknown currency \"{}\" (supported: {})",
            code,
            Currency::all()
                .iter()
                .map(|c| c.code())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })
}

#[derive(Serialize)]
struct JsonReport {
    period_days: u32,
    currency: Currency,
    charges: Vec<outlay::payment::Charge>,
    total: outlay::money::MoneyValue,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut tracker = PaymentTracker::new();
    tracker.add_payments(match cli.dataset {
        Dataset::Household => presets::household(),
        Dataset::Subscriptions => presets::subscriptions(),
    });

    let converter: Box<dyn CurrencyConverter> = match cli.source {
        RateSource::Static => Box::new(StaticRateConverter::default_rates()),
        RateSource::Feed => Box::new(ReferenceRateConverter::from_path(&cli.feed, cli.date)?),
    };

    let summary = ExpenseSummary::new(&tracker, converter.as_ref());
    let period = Duration::days(i64::from(cli.period_days));

    let charges = summary.charges(period, cli.currency)?;
    let total = summary.total(period, cli.currency)?;
    let sorted = report::sort_descending(&charges);

    match cli.format {
        Format::Json => {
            let json = serde_json::to_string_pretty(&JsonReport {
                period_days: cli.period_days,
                currency: cli.currency,
                charges: sorted,
                total,
            })?;
            println!("{}", json);
        }
        Format::Text => {
            print!("{}", report::listing(&sorted));
            println!("{}", report::total_line(&total).bold());

            if cli.charts {
                println!();
                println!("{}", "share of total".underline());
                print!("{}", report::proportion_chart(&sorted, 40));
                println!();
                println!("{}", "charges".underline());
                print!("{}", report::bar_chart(&sorted, 40));
            }
        }
    }

    Ok(())
}
