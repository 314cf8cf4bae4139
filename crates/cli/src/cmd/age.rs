use agecalc_core::dates::DateResolver;
use chrono::Local;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use super::{print_json, start};
use crate::AgeArgs;

#[derive(Serialize)]
struct AgeOutput {
    from: String,
    to: String,
    age: i32,
}

pub fn run(config: Option<&Path>, args: &AgeArgs) -> ExitCode {
    let session = match start(config, "age") {
        Ok(s) => s,
        Err(code) => return code,
    };
    let resolver = DateResolver::from_config(&session.config.parsing);

    let result = match args.to.as_deref() {
        Some(to) => resolver.age(args.from.as_str(), to),
        None => resolver.age_from_today(args.from.as_str()),
    };

    let age = match result {
        Ok(age) => age,
        Err(e) => {
            println!("FAIL agecalc age");
            println!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if args.json {
        let to = args
            .to
            .clone()
            .unwrap_or_else(|| Local::now().date_naive().format("%Y-%m-%d").to_string());
        return print_json(&AgeOutput { from: args.from.clone(), to, age });
    }
    println!("{age}");
    ExitCode::SUCCESS
}
