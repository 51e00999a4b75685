use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failure for a single calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    #[error("Invalid date key `{0}`: expected a real calendar date in YYYY-MM-DD form")]
    InvalidDateKey(String),
    #[error("Negative amount: {0}")]
    NegativeAmount(Decimal),
}

/// Error type that captures calendar and navigation failures.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("Month out of range: {0} (expected 0-11)")]
    MonthOutOfRange(u32),
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Errors raised while loading or persisting dashboard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
