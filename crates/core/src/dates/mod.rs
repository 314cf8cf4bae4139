//! Structured date parsing and age arithmetic.
//!
//! This module covers:
//! - The `2024年1月1日` / `2024年1月1日9時30分0秒` grammar ([`parse_date`])
//! - Free-form fallback parsing of ISO-ish and English date strings
//! - Resolving either kind of input to an instant ([`DateResolver`])
//! - Whole-year age with the "birthday not yet reached" correction ([`age`])

pub mod age;
pub mod error;
pub mod freeform;
pub mod parser;
pub mod resolver;
pub mod types;

pub use age::{age, age_from_today, age_on, years_between};
pub use error::DateError;
pub use freeform::parse_freeform;
pub use parser::{parse_date, parse_date_input};
pub use resolver::DateResolver;
pub use types::{CalendarDate, DateInput};
