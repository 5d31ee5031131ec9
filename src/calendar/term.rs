//! Term-count validation

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::{Result, ScheduleError};

/// Longest term accepted: every period must be expressible as an `i32`
/// month offset
pub const MAX_TERM_PERIODS: u32 = i32::MAX as u32;

/// Check that a term is a positive number of periods
pub fn validate_term(term_periods: i64) -> Result<u32> {
    u32::try_from(term_periods)
        .ok()
        .filter(|term| (1..=MAX_TERM_PERIODS).contains(term))
        .ok_or_else(|| ScheduleError::InvalidTerm(term_periods.to_string()))
}

/// Accept a term given as a decimal (e.g. from CSV/JSON) only if it is whole
pub fn term_from_decimal(term_periods: Decimal) -> Result<u32> {
    if !term_periods.fract().is_zero() {
        return Err(ScheduleError::InvalidTerm(term_periods.to_string()));
    }
    let whole = term_periods
        .to_i64()
        .ok_or_else(|| ScheduleError::InvalidTerm(term_periods.to_string()))?;
    validate_term(whole)
}
