//! Currency rounding and equal installment splitting

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::error::{Result, ScheduleError};

/// Decimal places of the loan currency
const CURRENCY_DP: u32 = 2;

/// Round to currency precision, halves away from zero (0.005 -> 0.01)
///
/// The result always carries exactly two decimal places (510 -> 510.00).
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DP);
    rounded
}

/// Equal installment: `total_payable / term_periods` at currency precision
///
/// Installments are rounded individually, so their sum can differ from
/// `total_payable` by a few cents.
pub fn split_equal_installments(total_payable: Decimal, term_periods: u32) -> Result<Decimal> {
    if term_periods == 0 {
        return Err(ScheduleError::DivisionByZero);
    }
    Ok(round_currency(total_payable / Decimal::from(term_periods)))
}

/// Simple interest over the whole term
///
/// `rate_pct` is a percentage charged on the original principal every
/// period. There is no compounding.
pub fn total_interest(principal: Decimal, rate_pct: Decimal, term_periods: u32) -> Decimal {
    round_currency(principal * rate_pct / dec!(100) * Decimal::from(term_periods))
}
