use chrono::{Datelike, NaiveDate};

/// Whole anniversaries of `joined` reached on or before `as_of`.
///
/// The anniversary is compared by (month, day), so somebody who joined on
/// 29 February completes a year on 1 March in non-leap years. Never negative.
pub fn completed_years(joined: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut years = as_of.year() - joined.year();
    if (as_of.month(), as_of.day()) < (joined.month(), joined.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}
