//! Load loan records from CSV
//!
//! Expected columns:
//! `loan_id,principal,rate_pct,term_periods,disbursement_date`
//!
//! `loan_id` may be empty. `rate_pct` is 0% when the cell is empty or the
//! column is missing. Dates are `YYYY-MM-DD`. Amounts are parsed from their
//! text, never through a float. Terms are read as decimals so that
//! fractional terms can be rejected instead of silently truncated.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::LoanScheduleInput;
use crate::calendar::term_from_decimal;
use crate::error::{Result, ScheduleError};

/// Raw CSV row
#[derive(Debug, Deserialize)]
struct LoanRecord {
    #[serde(default)]
    loan_id: Option<String>,
    #[serde(with = "rust_decimal::serde::str")]
    principal: Decimal,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    rate_pct: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str")]
    term_periods: Decimal,
    disbursement_date: NaiveDate,
}

/// Load loans from a CSV file
pub fn load_loans<P: AsRef<Path>>(path: P) -> Result<Vec<LoanScheduleInput>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let loans = load_loans_from_reader(BufReader::new(file))?;
    info!("Loaded {} loans from {}", loans.len(), path.display());
    Ok(loans)
}

/// Load loans from any CSV reader
///
/// Stops at the first malformed record. Record numbers in errors are 1-based
/// and exclude the header row.
pub fn load_loans_from_reader<R: Read>(reader: R) -> Result<Vec<LoanScheduleInput>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut loans = Vec::new();
    for (idx, result) in rdr.deserialize::<LoanRecord>().enumerate() {
        let record = result?;
        let term_periods = term_from_decimal(record.term_periods).map_err(|e| {
            ScheduleError::InvalidRecord {
                record: idx + 1,
                source: Box::new(e),
            }
        })?;

        loans.push(LoanScheduleInput {
            loan_id: record.loan_id.filter(|id| !id.is_empty()),
            principal: record.principal,
            rate_pct: record.rate_pct.unwrap_or_default(),
            term_periods,
            disbursement_date: record.disbursement_date,
        });
    }

    Ok(loans)
}
