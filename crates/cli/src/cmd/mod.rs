pub mod age;
pub mod best;
pub mod doctor;
pub mod parse;

use agecalc_core::config::loader::{default_config_path, ConfigLoader};
use agecalc_core::config::types::ResolvedConfig;
use std::path::Path;
use std::process::ExitCode;
use tracing_appender::non_blocking::WorkerGuard;

/// Loaded configuration plus the logger it installed.
///
/// Keep it alive for the whole command: dropping it flushes the log file.
pub struct Session {
    pub config: ResolvedConfig,
    _log_guard: Option<WorkerGuard>,
}

/// Load configuration and install logging.
///
/// On failure the `FAIL agecalc <command>` report is already printed and the
/// exit code to return is handed back.
pub fn start(config: Option<&Path>, command: &str) -> Result<Session, ExitCode> {
    let rc = match ConfigLoader::load(config) {
        Ok(rc) => rc,
        Err(e) => {
            println!("FAIL agecalc {command}");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            return Err(ExitCode::FAILURE);
        }
    };

    match crate::logging::init(&rc.logging) {
        Ok(guard) => Ok(Session { config: rc, _log_guard: guard }),
        Err(e) => {
            println!("FAIL agecalc {command}");
            println!("{e}");
            for cause in e.chain().skip(1) {
                println!("caused by: {cause}");
            }
            Err(ExitCode::FAILURE)
        }
    }
}

/// Pretty-print `value` as JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to serialize output: {e}");
            ExitCode::FAILURE
        }
    }
}
