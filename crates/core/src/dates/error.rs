use thiserror::Error;

/// Error type for resolving date inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    /// The input matched neither the structured grammar nor any free-form
    /// format, or it resolved outside the representable calendar range.
    #[error("invalid date: {input}")]
    InvalidDate { input: String },
}

impl DateError {
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidDate { input: input.into() }
    }
}
