use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub parsing: ParsingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Settings for free-form date parsing.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ParsingConfig {
    /// chrono format strings tried after the built-in free-form formats.
    /// Each one is tried as a date-time format first, then as a date-only format.
    #[serde(default)]
    pub extra_formats: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// File the settings were read from, `None` when running on defaults.
    pub source: Option<PathBuf>,
    pub logging: LoggingConfig,
    pub parsing: ParsingConfig,
}
