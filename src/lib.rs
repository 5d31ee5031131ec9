//! Loan schedule and agreement-date engine
//!
//! Pure calendar and currency computations for microfinance loans:
//! - Month rollforward with clamping to the last valid day of the month
//! - First/final due dates and the ordinal due-day label
//! - Equal installment splitting at currency precision
//! - Full repayment schedules built from a loan record
//!
//! Nothing here performs I/O except the CSV loader in [`schedule::loader`].

pub mod calendar;
pub mod error;
pub mod schedule;

pub use calendar::{
    add_months_clamped, agreement_dates, compute_final_due_date, compute_first_due_date,
    ordinal_day_label, AgreementDates,
};
pub use error::{Result, ScheduleError};
pub use schedule::{
    build_schedule, build_schedules, split_equal_installments, LoanSchedule, LoanScheduleInput,
    ScheduleEntry,
};
