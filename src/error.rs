//! Error types for outlay

use crate::money::Currency;
use thiserror::Error;

/// Main error type for outlay
#[derive(Error, Debug)]
pub enum OutlayError {
    #[error("no conversion route from {from} to {to}")]
    UnsupportedConversion { from: Currency, to: Currency },

    #[error("invalid recurrence for payment \"{description}\": interval must be a positive duration")]
    InvalidRecurrence { description: String },

    #[error("rate dataset error: {0}")]
    DataSource(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for outlay operations
pub type Result<T> = std::result::Result<T, OutlayError>;
