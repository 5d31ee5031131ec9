//! Calendar-month rollforward with end-of-month clamping
//!
//! Adding N months keeps the day-of-month of the start date where the target
//! month has it, and otherwise lands on the last day of the target month:
//! - 2025-01-31 + 1 month = 2025-02-28
//! - 2024-01-31 + 1 month = 2024-02-29
//! - 2024-02-29 + 12 months = 2025-02-28
//!
//! Clamping is not additive. 2025-01-31 + 1 + 1 is 2025-03-28, while
//! 2025-01-31 + 2 is 2025-03-31. Schedules therefore always roll from the
//! disbursement date, never from the previous due date.

use chrono::{Datelike, NaiveDate};

use super::term::validate_term;
use crate::error::{Result, ScheduleError};

/// Whether `year` is a Gregorian leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Date `months` calendar months after `date` (before it when negative)
///
/// The day-of-month is clamped to the length of the target month. The only
/// failure is a target year outside the range `NaiveDate` can represent.
pub fn add_months_clamped(date: NaiveDate, months: i32) -> Result<NaiveDate> {
    let out_of_range = || ScheduleError::DateOutOfRange { date, months };
    let original_day = date.day();

    // Count from day 1 of the start month so no day overflow can occur
    let start = i64::from(date.year()) * 12 + i64::from(date.month0());
    let target = start + i64::from(months);

    let year = i32::try_from(target.div_euclid(12)).map_err(|_| out_of_range())?;
    let month = target.rem_euclid(12) as u32 + 1;

    let day = original_day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(out_of_range)
}

/// First installment due date: one month after disbursement
pub fn compute_first_due_date(disbursement_date: NaiveDate) -> Result<NaiveDate> {
    add_months_clamped(disbursement_date, 1)
}

/// Final installment due date: `term_periods` months after disbursement
///
/// Fails with [`ScheduleError::InvalidTerm`] unless `term_periods` is positive.
pub fn compute_final_due_date(
    disbursement_date: NaiveDate,
    term_periods: i64,
) -> Result<NaiveDate> {
    let term = validate_term(term_periods)?;
    let months = i32::try_from(term)
        .map_err(|_| ScheduleError::InvalidTerm(term_periods.to_string()))?;
    add_months_clamped(disbursement_date, months)
}
