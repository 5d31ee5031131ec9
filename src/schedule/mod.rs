//! Loan repayment schedules: inputs, installment math, builder and CSV loader

mod builder;
mod input;
pub mod installment;
pub mod loader;

pub use builder::{build_schedule, build_schedules, LoanSchedule, ScheduleEntry};
pub use input::LoanScheduleInput;
pub use installment::{round_currency, split_equal_installments, total_interest};
pub use loader::{load_loans, load_loans_from_reader};
