//! Loan record consumed by the schedule builder

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Loan terms needed to build a repayment schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScheduleInput {
    /// Caller's identifier, carried through to the schedule
    #[serde(default)]
    pub loan_id: Option<String>,

    /// Amount released to the borrower (must be positive)
    pub principal: Decimal,

    /// Interest in percent of principal, charged every period
    /// (3 = 3% per month, simple interest)
    #[serde(default)]
    pub rate_pct: Decimal,

    /// Number of monthly installments (must be positive)
    pub term_periods: u32,

    /// Anchor for every due date
    pub disbursement_date: NaiveDate,
}

impl LoanScheduleInput {
    pub fn new(
        principal: Decimal,
        rate_pct: Decimal,
        term_periods: u32,
        disbursement_date: NaiveDate,
    ) -> Self {
        Self {
            loan_id: None,
            principal,
            rate_pct,
            term_periods,
            disbursement_date,
        }
    }

    pub fn with_loan_id(mut self, loan_id: impl Into<String>) -> Self {
        self.loan_id = Some(loan_id.into());
        self
    }
}
