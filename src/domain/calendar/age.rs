use chrono::{Datelike, NaiveDate};

/// Age in whole years on `today`.
///
/// One year less than the year difference while `today`'s month/day is still
/// before the birthday's month/day.
pub fn age_on(today: NaiveDate, birthday: NaiveDate) -> i32 {
    let not_yet = (today.month(), today.day()) < (birthday.month(), birthday.day());
    today.year() - birthday.year() - i32::from(not_yet)
}
