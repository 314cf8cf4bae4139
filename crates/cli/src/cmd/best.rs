//! Pick the top-scoring record from a JSON file.

use agecalc_core::records::{max_score_record, parse_records, record_score, Record};
use color_eyre::eyre::{Result, WrapErr};
use serde_json::{json, Value};
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;
use tabled::{settings::Style, Table, Tabled};
use tracing::info;

use super::{print_json, start};
use crate::BestArgs;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn run(config: Option<&Path>, args: &BestArgs) -> ExitCode {
    let _session = match start(config, "best") {
        Ok(s) => s,
        Err(code) => return code,
    };

    let records = match load_records(&args.file) {
        Ok(records) => records,
        Err(e) => {
            println!("FAIL agecalc best");
            println!("{e}");
            for cause in e.chain().skip(1) {
                println!("caused by: {cause}");
            }
            return ExitCode::FAILURE;
        }
    };

    info!("scoring {} records", records.len());

    let Some((index, record)) = max_score_record(&records) else {
        println!("(no records)");
        return ExitCode::SUCCESS;
    };
    let score = record_score(record);

    if args.json {
        return print_json(&json!({ "index": index, "score": score, "record": record }));
    }

    println!("record #{index} (score {score})");
    let rows: Vec<FieldRow> = record
        .iter()
        .map(|(k, v)| FieldRow { field: k.clone(), value: display_value(v) })
        .collect();
    println!("{}", Table::new(&rows).with(Style::rounded()));
    ExitCode::SUCCESS
}

fn load_records(path: &Path) -> Result<Vec<Record>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).wrap_err("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?
    };

    let records = parse_records(&content)
        .wrap_err_with(|| format!("invalid records in {}", path.display()))?;
    Ok(records)
}

fn display_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
