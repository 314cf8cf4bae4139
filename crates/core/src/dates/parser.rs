//! Parser for the structured `年月日` date format.
//!
//! Accepted shapes:
//! - `2024年1月1日` (midnight)
//! - `2024年01月01号` (`号` is accepted as the day marker)
//! - `2024年1月1日9時30分0秒`
//!
//! The year has exactly four digits, every other field one or two. Fields
//! are not range-checked here; see [`CalendarDate::to_naive_datetime`].

use std::sync::LazyLock;

use regex::Regex;

use super::types::{CalendarDate, DateInput};

// ASCII digits only: `\d` would also match full-width and other Unicode digits.
static STRUCTURED_DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^([0-9]{4})年([0-9]{1,2})月([0-9]{1,2})[日号]",
        r"(?:([0-9]{1,2})時([0-9]{1,2})分([0-9]{1,2})秒)?$",
    ))
    .expect("valid regex")
});

/// Parse a structured date string.
///
/// Returns `None` unless the whole string matches the grammar.
pub fn parse_date(input: &str) -> Option<CalendarDate> {
    let caps = STRUCTURED_DATE_RE.captures(input)?;

    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = caps[1].parse::<i32>().ok()?;
    let month = field(2)?;
    let day = field(3)?;

    // The time group is all-or-nothing, so checking the hour is enough.
    let date = match caps.get(4) {
        Some(_) => {
            CalendarDate::new(year, month, day).with_time(field(4)?, field(5)?, field(6)?)
        }
        None => CalendarDate::new(year, month, day),
    };

    Some(date)
}

/// Like [`parse_date`], but an already-structured input is returned as is.
pub fn parse_date_input(input: &DateInput) -> Option<CalendarDate> {
    match input {
        DateInput::Date(d) => Some(*d),
        DateInput::Text(s) => parse_date(s),
    }
}
