use std::path::Path;
use std::process::ExitCode;

use agecalc_core::config::loader::default_config_path;

use super::start;

pub fn run(config: Option<&Path>) -> ExitCode {
    let session = match start(config, "doctor") {
        Ok(s) => s,
        Err(code) => return code,
    };
    let rc = &session.config;

    println!("OK   agecalc doctor");
    println!("version: {}", agecalc_core::version());
    match rc.source {
        Some(ref p) => println!("path: {}", p.display()),
        None => println!(
            "path: {} (not found, using defaults)",
            default_config_path().display()
        ),
    }
    println!("logging.level: {}", rc.logging.level);
    if let Some(ref level) = rc.logging.file_level {
        println!("logging.file_level: {level}");
    }
    if let Some(ref file) = rc.logging.file {
        println!("logging.file: {}", file.display());
    }
    if rc.parsing.extra_formats.is_empty() {
        println!("parsing.extra_formats: (none)");
    } else {
        println!("parsing.extra_formats: {}", rc.parsing.extra_formats.join(", "));
    }
    ExitCode::SUCCESS
}
