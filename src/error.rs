//! Error types for schedule computations and loan loading

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors returned by the schedule engine
///
/// All variants except the loader ones are caller precondition failures.
/// They are returned as soon as they are detected and never replaced by a
/// default value.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Term count is zero, negative, or not a whole number
    #[error("invalid term: {0} (term must be a positive whole number of periods)")]
    InvalidTerm(String),

    /// Installment split requested over zero periods
    #[error("cannot split an amount over zero periods")]
    DivisionByZero,

    /// Rollforward target falls outside the representable calendar
    #[error("date out of range: {months} months from {date}")]
    DateOutOfRange { date: chrono::NaiveDate, months: i32 },

    #[error("invalid principal: {0} (principal must be positive)")]
    InvalidPrincipal(Decimal),

    #[error("invalid rate: {0}% (rate must not be negative)")]
    InvalidRate(Decimal),

    /// A loan record could not be turned into a schedule input
    #[error("record {record}: {source}")]
    InvalidRecord {
        record: usize,
        #[source]
        source: Box<ScheduleError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScheduleError>;
