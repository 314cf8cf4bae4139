//! Fallback parsing for date strings outside the structured grammar.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Parse ISO-ish and common English date strings.
///
/// Inputs carrying a UTC offset are converted into the local calendar.
/// Date-only inputs resolve to midnight. `extra_formats` are tried last.
pub fn parse_freeform(text: &str, extra_formats: &[String]) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    let builtin = DATETIME_FORMATS.iter().copied().map(|f| (f, true));
    let dates = DATE_FORMATS.iter().copied().map(|f| (f, false));

    builtin
        .chain(dates)
        .find_map(|(fmt, with_time)| parse_with(text, fmt, with_time))
        .or_else(|| {
            extra_formats.iter().find_map(|fmt| {
                parse_with(text, fmt, true).or_else(|| parse_with(text, fmt, false))
            })
        })
}

fn parse_with(text: &str, fmt: &str, with_time: bool) -> Option<NaiveDateTime> {
    if with_time {
        NaiveDateTime::parse_from_str(text, fmt).ok()
    } else {
        NaiveDate::parse_from_str(text, fmt).ok().and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}
