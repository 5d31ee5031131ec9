//! Calendar computations: month rollforward, due dates, ordinal day labels

mod agreement;
mod ordinal;
mod rollforward;
mod term;

pub use agreement::{agreement_dates, AgreementDates};
pub use ordinal::ordinal_day_label;
pub use rollforward::{add_months_clamped, compute_final_due_date, compute_first_due_date};
pub use term::{term_from_decimal, validate_term, MAX_TERM_PERIODS};
