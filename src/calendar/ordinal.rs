//! English ordinal labels for the recurring due day ("31st", "2nd", "11th")

use chrono::{Datelike, NaiveDate};

/// Ordinal suffix for a day-of-month
fn ordinal_suffix(day: u32) -> &'static str {
    // 11, 12 and 13 take "th" despite their last digit
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Day-of-month of the disbursement date with its ordinal suffix
///
/// Used to describe the recurring due day, as in "due every 2nd of the
/// succeeding months".
pub fn ordinal_day_label(disbursement_date: NaiveDate) -> String {
    let day = disbursement_date.day();
    format!("{}{}", day, ordinal_suffix(day))
}
