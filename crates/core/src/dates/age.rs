use chrono::{Datelike, Local, NaiveDateTime};

use super::error::DateError;
use super::resolver::DateResolver;
use super::types::{CalendarDate, DateInput};

/// Whole years from `from` to `to`.
///
/// One year is subtracted when `to`'s month/day falls before `from`'s
/// month/day. Time of day is ignored. The result is negative when `to`
/// precedes `from`.
pub fn years_between(from: NaiveDateTime, to: NaiveDateTime) -> i32 {
    let mut years = to.year() - from.year();
    let months = to.month() as i32 - from.month() as i32;

    if months < 0 || (months == 0 && to.day() < from.day()) {
        years -= 1;
    }

    years
}

/// Age in whole years between two inputs, each being a [`CalendarDate`], a
/// structured date string (`2000年1月1日`) or a free-form date string.
///
/// ```
/// use agecalc_core::dates::age;
///
/// assert_eq!(age("2000年1月2日", "2024年1月1日"), Ok(23));
/// assert!(age("not-a-date", "2024年1月1日").is_err());
/// ```
pub fn age(
    date1: impl Into<DateInput>,
    date2: impl Into<DateInput>,
) -> Result<i32, DateError> {
    DateResolver::default().age(date1, date2)
}

/// Age of `birth` on the current local date.
pub fn age_from_today(birth: &CalendarDate) -> Result<i32, DateError> {
    age_on(birth, Local::now().naive_local())
}

/// Age of `birth` on `reference`.
pub fn age_on(birth: &CalendarDate, reference: NaiveDateTime) -> Result<i32, DateError> {
    let from =
        birth.to_naive_datetime().ok_or_else(|| DateError::invalid(birth.to_string()))?;
    Ok(years_between(from, reference))
}
