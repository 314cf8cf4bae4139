use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// A calendar date with optional time of day, holding the literal field values.
///
/// Fields are not range-checked: `month: 13` or `day: 32` are representable
/// and only get carried into neighbouring units by [`CalendarDate::to_naive_datetime`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CalendarDate {
    pub year: i32,
    /// 1-based month (January = 1).
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub second: u32,
}

impl CalendarDate {
    /// Create a date at midnight.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day, hour: 0, minute: 0, second: 0 }
    }

    pub fn with_time(self, hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second, ..self }
    }

    /// Resolve to an instant, carrying out-of-range fields into the next
    /// larger unit (month 13 -> January of the following year, day 0 -> last
    /// day of the previous month, hour 24 -> next day, ...).
    ///
    /// Returns `None` when the result falls outside chrono's supported range.
    pub fn to_naive_datetime(&self) -> Option<NaiveDateTime> {
        let total_months = i64::from(self.year) * 12 + i64::from(self.month) - 1;
        let year = i32::try_from(total_months.div_euclid(12)).ok()?;
        let month = u32::try_from(total_months.rem_euclid(12)).ok()? + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let date =
            first.checked_add_signed(TimeDelta::try_days(i64::from(self.day) - 1)?)?;

        let time_of_day = TimeDelta::try_hours(i64::from(self.hour))?
            .checked_add(&TimeDelta::try_minutes(i64::from(self.minute))?)?
            .checked_add(&TimeDelta::try_seconds(i64::from(self.second))?)?;

        date.and_hms_opt(0, 0, 0)?.checked_add_signed(time_of_day)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        Self::new(d.year(), d.month(), d.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Anything the age calculator accepts: an already-parsed date or text that
/// still has to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(CalendarDate),
    Text(String),
}

impl fmt::Display for DateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::Date(d) => d.fmt(f),
            DateInput::Text(s) => f.write_str(s),
        }
    }
}

impl From<CalendarDate> for DateInput {
    fn from(d: CalendarDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<&CalendarDate> for DateInput {
    fn from(d: &CalendarDate) -> Self {
        DateInput::Date(*d)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d.into())
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::Date(dt.into())
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

impl From<&String> for DateInput {
    fn from(s: &String) -> Self {
        DateInput::Text(s.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd_hms(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn test_in_range_date_resolves_unchanged() {
        let date = CalendarDate::new(2024, 2, 29).with_time(23, 59, 58);
        assert_eq!(date.to_naive_datetime(), Some(ymd_hms(2024, 2, 29, 23, 59, 58)));
    }

    #[test]
    fn test_month_thirteen_rolls_into_next_year() {
        let date = CalendarDate::new(2024, 13, 1);
        assert_eq!(date.to_naive_datetime(), Some(ymd_hms(2025, 1, 1, 0, 0, 0)));
    }

    #[test]
    fn test_month_zero_is_previous_december() {
        let date = CalendarDate::new(2024, 0, 15);
        assert_eq!(date.to_naive_datetime(), Some(ymd_hms(2023, 12, 15, 0, 0, 0)));
    }

    #[test]
    fn test_day_zero_is_last_day_of_previous_month() {
        let date = CalendarDate::new(2024, 3, 0);
        assert_eq!(date.to_naive_datetime(), Some(ymd_hms(2024, 2, 29, 0, 0, 0)));
    }

    #[test]
    fn test_day_overflow_rolls_into_next_month() {
        // 2023 is not a leap year
        let date = CalendarDate::new(2023, 2, 30);
        assert_eq!(date.to_naive_datetime(), Some(ymd_hms(2023, 3, 2, 0, 0, 0)));
    }

    #[test]
    fn test_time_overflow_rolls_into_next_day() {
        let date = CalendarDate::new(2024, 12, 31).with_time(24, 60, 0);
        assert_eq!(date.to_naive_datetime(), Some(ymd_hms(2025, 1, 1, 1, 0, 0)));
    }

    #[test]
    fn test_unrepresentable_year_is_none() {
        let date = CalendarDate::new(i32::MAX, 12, 31);
        assert_eq!(date.to_naive_datetime(), None);
    }

    #[test]
    fn test_display() {
        let date = CalendarDate::new(2024, 1, 5).with_time(9, 3, 0);
        assert_eq!(date.to_string(), "2024-01-05 09:03:00");
    }

    #[test]
    fn test_from_naive_datetime_keeps_fields() {
        let date = CalendarDate::from(ymd_hms(1999, 12, 31, 23, 59, 59));
        assert_eq!(date, CalendarDate::new(1999, 12, 31).with_time(23, 59, 59));
    }

    #[test]
    fn test_input_display() {
        let date = DateInput::Date(CalendarDate::new(2024, 13, 1));
        assert_eq!(date.to_string(), "2024-13-01 00:00:00");
        assert_eq!(DateInput::from("2024年1月1日").to_string(), "2024年1月1日");
    }

    #[test]
    fn test_input_conversions() {
        assert_eq!(
            DateInput::from("2024年1月1日"),
            DateInput::Text("2024年1月1日".into())
        );
        let d = CalendarDate::new(2024, 1, 1);
        assert_eq!(DateInput::from(d), DateInput::Date(d));
        assert_eq!(
            DateInput::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            DateInput::Date(d)
        );
    }
}
