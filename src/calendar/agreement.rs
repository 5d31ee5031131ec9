//! Dates printed on the loan agreement

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{compute_final_due_date, compute_first_due_date, ordinal_day_label};
use crate::error::Result;

/// Due dates and the recurring due-day label for one loan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgreementDates {
    pub first_due_date: NaiveDate,
    pub final_due_date: NaiveDate,
    /// Recurring due day, e.g. "31st"
    pub due_day_label: String,
}

/// Agreement dates for a loan disbursed on `disbursement_date`
///
/// Both due dates use the clamped rollforward, so the first due date of a
/// loan disbursed on the 31st is the last day of the following month.
pub fn agreement_dates(disbursement_date: NaiveDate, term_periods: i64) -> Result<AgreementDates> {
    Ok(AgreementDates {
        first_due_date: compute_first_due_date(disbursement_date)?,
        final_due_date: compute_final_due_date(disbursement_date, term_periods)?,
        due_day_label: ordinal_day_label(disbursement_date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;

    #[test]
    fn test_end_of_january_twelve_periods() {
        let disbursed = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let dates = agreement_dates(disbursed, 12).unwrap();

        assert_eq!(dates.first_due_date, NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());
        assert_eq!(dates.final_due_date, NaiveDate::from_ymd_opt(2026, 1, 31).unwrap());
        assert_eq!(dates.due_day_label, "31st");
    }

    #[test]
    fn test_single_period_first_equals_final() {
        let disbursed = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        let dates = agreement_dates(disbursed, 1).unwrap();

        assert_eq!(dates.first_due_date, dates.final_due_date);
        assert_eq!(dates.due_day_label, "2nd");
    }

    #[test]
    fn test_invalid_term() {
        let disbursed = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
        assert!(matches!(agreement_dates(disbursed, 0), Err(ScheduleError::InvalidTerm(_))));
    }
}
