use chrono::{Local, NaiveDateTime};
use tracing::debug;

use super::age::years_between;
use super::error::DateError;
use super::freeform::parse_freeform;
use super::parser::parse_date;
use super::types::DateInput;
use crate::config::types::ParsingConfig;

/// Resolves [`DateInput`]s to instants.
///
/// Text is tried against the structured grammar first, then against the
/// free-form formats (built-in ones, followed by `extra_formats`).
#[derive(Debug, Clone, Default)]
pub struct DateResolver {
    extra_formats: Vec<String>,
}

impl DateResolver {
    pub fn new(extra_formats: Vec<String>) -> Self {
        Self { extra_formats }
    }

    pub fn from_config(cfg: &ParsingConfig) -> Self {
        Self::new(cfg.extra_formats.clone())
    }

    pub fn resolve(&self, input: &DateInput) -> Result<NaiveDateTime, DateError> {
        match input {
            DateInput::Date(d) => d
                .to_naive_datetime()
                .ok_or_else(|| DateError::invalid(input.to_string())),
            DateInput::Text(text) => self.resolve_text(text),
        }
    }

    fn resolve_text(&self, text: &str) -> Result<NaiveDateTime, DateError> {
        if let Some(date) = parse_date(text) {
            debug!(input = text, parsed = %date, "matched structured date");
            return date.to_naive_datetime().ok_or_else(|| DateError::invalid(text));
        }

        if let Some(dt) = parse_freeform(text, &self.extra_formats) {
            debug!(input = text, resolved = %dt, "matched free-form date");
            return Ok(dt);
        }

        debug!(input = text, "no date format matched");
        Err(DateError::invalid(text))
    }

    /// Whole years from `date1` to `date2`. See [`years_between`].
    pub fn age(
        &self,
        date1: impl Into<DateInput>,
        date2: impl Into<DateInput>,
    ) -> Result<i32, DateError> {
        let from = self.resolve(&date1.into())?;
        let to = self.resolve(&date2.into())?;
        Ok(years_between(from, to))
    }

    /// Whole years from `birth` to the current local date.
    pub fn age_from_today(&self, birth: impl Into<DateInput>) -> Result<i32, DateError> {
        let from = self.resolve(&birth.into())?;
        Ok(years_between(from, Local::now().naive_local()))
    }
}
