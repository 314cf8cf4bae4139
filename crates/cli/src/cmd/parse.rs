use agecalc_core::dates::parse_date;
use std::path::Path;
use std::process::ExitCode;
use tracing::debug;

use super::{print_json, start};
use crate::ParseArgs;

pub fn run(config: Option<&Path>, args: &ParseArgs) -> ExitCode {
    let _session = match start(config, "parse") {
        Ok(s) => s,
        Err(code) => return code,
    };

    let Some(date) = parse_date(&args.text) else {
        println!("FAIL agecalc parse");
        println!("not a structured date: {}", args.text);
        println!("expected: YYYY年M月D日 or YYYY年M月D日H時M分S秒");
        return ExitCode::FAILURE;
    };

    debug!(input = %args.text, parsed = %date, "parsed structured date");

    if args.json {
        return print_json(&date);
    }
    println!("{date}");
    ExitCode::SUCCESS
}
