//! Picking the record whose numeric fields sum highest.

use serde_json::{Map, Value};
use thiserror::Error;

/// A record: field name to JSON value.
pub type Record = Map<String, Value>;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to parse records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
}

/// Parse a JSON array of objects.
pub fn parse_records(json: &str) -> Result<Vec<Record>, RecordError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, v)| match v {
            Value::Object(map) => Ok(map),
            _ => Err(RecordError::NotAnObject { index }),
        })
        .collect()
}

/// Sum of every numeric field. Strings, booleans, nulls, arrays and nested
/// objects contribute nothing.
pub fn record_score(record: &Record) -> f64 {
    record.values().filter_map(Value::as_f64).sum()
}

/// The first record with the highest score, with its index.
///
/// Ties keep the earliest record.
pub fn max_score_record(records: &[Record]) -> Option<(usize, &Record)> {
    let mut best: Option<(usize, &Record, f64)> = None;

    for (idx, record) in records.iter().enumerate() {
        let score = record_score(record);
        match best {
            Some((_, _, top)) if score <= top => {}
            _ => best = Some((idx, record, score)),
        }
    }

    best.map(|(idx, record, _)| (idx, record))
}
