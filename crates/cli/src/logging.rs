//! Tracing setup for the CLI: stderr always, a log file when configured.

use agecalc_core::config::types::LoggingConfig;
use color_eyre::eyre::{Result, WrapErr};
use std::fs::File;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Install the global subscriber.
///
/// When `cfg.file` is set the returned guard owns the file writer; lines
/// reach the file only while it is alive and are flushed when it drops.
pub fn init(cfg: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_filter(filter_for(Some(cfg.level.as_str()), LevelFilter::INFO));

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.file else {
        registry.try_init().wrap_err("failed to install logger")?;
        return Ok(None);
    };

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    let file_level = cfg.file_level.as_deref().or(Some(cfg.level.as_str()));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(filter_for(file_level, LevelFilter::DEBUG));

    registry.with(file_layer).try_init().wrap_err("failed to install logger")?;
    Ok(Some(guard))
}

fn filter_for(level: Option<&str>, fallback: LevelFilter) -> EnvFilter {
    let level = level.and_then(parse_level).unwrap_or(fallback);
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}
