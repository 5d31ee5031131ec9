//! Repayment schedule construction
//!
//! Every due date is rolled forward from the disbursement date itself
//! (period k = disbursement + k months, clamped), so a loan disbursed on the
//! 31st falls due on the 31st of every month that has one.

use chrono::NaiveDate;
use log::debug;
use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::installment::{split_equal_installments, total_interest};
use super::LoanScheduleInput;
use crate::calendar::{add_months_clamped, agreement_dates, validate_term, AgreementDates};
use crate::error::{Result, ScheduleError};

/// One installment of a schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// 1-based period number
    pub period_index: u32,
    pub due_date: NaiveDate,
    pub period_amount: Decimal,
}

/// Full repayment schedule for one loan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSchedule {
    pub loan_id: Option<String>,
    pub principal: Decimal,
    pub rate_pct: Decimal,
    pub term_periods: u32,
    pub total_interest: Decimal,
    pub total_payable: Decimal,
    /// Equal amount due each period
    pub period_amount: Decimal,
    pub agreement: AgreementDates,
    pub entries: Vec<ScheduleEntry>,
}

impl LoanSchedule {
    /// Sum of all installments (can differ from `total_payable` by rounding)
    pub fn scheduled_total(&self) -> Decimal {
        self.entries.iter().map(|entry| entry.period_amount).sum()
    }
}

/// Build the repayment schedule for one loan
pub fn build_schedule(input: &LoanScheduleInput) -> Result<LoanSchedule> {
    if input.principal <= Decimal::ZERO {
        return Err(ScheduleError::InvalidPrincipal(input.principal));
    }
    if input.rate_pct < Decimal::ZERO {
        return Err(ScheduleError::InvalidRate(input.rate_pct));
    }
    let term = validate_term(i64::from(input.term_periods))?;

    // Fails before allocating entries if the final date is unrepresentable
    let agreement = agreement_dates(input.disbursement_date, i64::from(term))?;

    let total_interest = total_interest(input.principal, input.rate_pct, term);
    let total_payable = input.principal + total_interest;
    let period_amount = split_equal_installments(total_payable, term)?;

    let entries = (1..=term)
        .map(|period_index| -> Result<ScheduleEntry> {
            let months = i32::try_from(period_index)
                .map_err(|_| ScheduleError::InvalidTerm(term.to_string()))?;
            Ok(ScheduleEntry {
                period_index,
                due_date: add_months_clamped(input.disbursement_date, months)?,
                period_amount,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        "Built schedule for loan {}: {} x {} from {} to {}",
        input.loan_id.as_deref().unwrap_or("-"),
        term,
        period_amount,
        agreement.first_due_date,
        agreement.final_due_date
    );

    Ok(LoanSchedule {
        loan_id: input.loan_id.clone(),
        principal: input.principal,
        rate_pct: input.rate_pct,
        term_periods: term,
        total_interest,
        total_payable,
        period_amount,
        agreement,
        entries,
    })
}

/// Build schedules for many loans in parallel
///
/// Results keep the order of `inputs`; a failing loan does not affect the
/// others.
pub fn build_schedules(inputs: &[LoanScheduleInput]) -> Vec<Result<LoanSchedule>> {
    inputs.par_iter().map(build_schedule).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_end_of_month_schedule() {
        let input = LoanScheduleInput::new(dec!(12000), dec!(2), 12, ymd(2025, 1, 31));
        let schedule = build_schedule(&input).unwrap();

        assert_eq!(schedule.entries.len(), 12);
        assert_eq!(schedule.total_interest, dec!(2880));
        assert_eq!(schedule.total_payable, dec!(14880));
        assert_eq!(schedule.period_amount, dec!(1240));

        let due: Vec<NaiveDate> = schedule.entries.iter().map(|e| e.due_date).collect();
        assert_eq!(due[0], ymd(2025, 2, 28));
        // Back on the 31st once the month allows it
        assert_eq!(due[1], ymd(2025, 3, 31));
        assert_eq!(due[2], ymd(2025, 4, 30));
        assert_eq!(due[11], ymd(2026, 1, 31));

        assert_eq!(schedule.agreement.first_due_date, due[0]);
        assert_eq!(schedule.agreement.final_due_date, due[11]);
        assert_eq!(schedule.agreement.due_day_label, "31st");
    }

    #[test]
    fn test_period_indices_are_one_based() {
        let input = LoanScheduleInput::new(dec!(15000), dec!(0), 5, ymd(2025, 3, 10));
        let schedule = build_schedule(&input).unwrap();

        let indices: Vec<u32> = schedule.entries.iter().map(|e| e.period_index).collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5]);
        assert!(schedule.entries.iter().all(|e| e.period_amount == dec!(3000)));
        assert_eq!(schedule.scheduled_total(), dec!(15000));
    }

    #[test]
    fn test_rounding_residue() {
        let input = LoanScheduleInput::new(dec!(10000), dec!(0), 3, ymd(2025, 3, 10));
        let schedule = build_schedule(&input).unwrap();

        assert_eq!(schedule.period_amount, dec!(3333.33));
        assert_eq!(schedule.scheduled_total(), dec!(9999.99));
        assert_eq!(schedule.total_payable, dec!(10000));
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let date = ymd(2025, 1, 15);

        let zero_principal = LoanScheduleInput::new(dec!(0), dec!(3), 6, date);
        let result = build_schedule(&zero_principal);
        assert!(matches!(result, Err(ScheduleError::InvalidPrincipal(_))));

        let negative_rate = LoanScheduleInput::new(dec!(1000), dec!(-1), 6, date);
        let result = build_schedule(&negative_rate);
        assert!(matches!(result, Err(ScheduleError::InvalidRate(_))));

        let zero_term = LoanScheduleInput::new(dec!(1000), dec!(3), 0, date);
        let result = build_schedule(&zero_term);
        assert!(matches!(result, Err(ScheduleError::InvalidTerm(_))));
    }

    #[test]
    fn test_oversized_term_reports_term() {
        let input = LoanScheduleInput::new(dec!(1000), dec!(3), u32::MAX, ymd(2025, 1, 15));
        match build_schedule(&input) {
            Err(ScheduleError::InvalidTerm(term)) => assert_eq!(term, u32::MAX.to_string()),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_batch_keeps_order_and_isolates_failures() {
        let inputs = vec![
            LoanScheduleInput::new(dec!(1000), dec!(1), 2, ymd(2025, 1, 1)).with_loan_id("A"),
            LoanScheduleInput::new(dec!(1000), dec!(1), 0, ymd(2025, 1, 1)).with_loan_id("B"),
            LoanScheduleInput::new(dec!(3000), dec!(1), 3, ymd(2025, 1, 1)).with_loan_id("C"),
        ];
        let results = build_schedules(&inputs);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().loan_id.as_deref(), Some("A"));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().loan_id.as_deref(), Some("C"));
        assert_eq!(results[2].as_ref().unwrap().period_amount, dec!(1030));
    }
}
