//! Runtime configuration resolution.
//!
//! Precedence for every setting: explicit value, then environment variable,
//! then built-in default. Blank values are treated as unset.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable overriding the data file location.
pub const DATA_PATH_ENV: &str = "PROJTRACK_DATA_PATH";
/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "PROJTRACK_LOG_LEVEL";
/// Data file name used when nothing else is configured.
pub const DEFAULT_DATA_FILE_NAME: &str = "projects.json";

/// Resolves the data file path.
///
/// Falls back to `projects.json` in the current working directory.
pub fn resolve_data_path(explicit: Option<&str>) -> PathBuf {
    pick(explicit, DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE_NAME))
}

/// Resolves the log level name; validation happens in `init_logging`.
pub fn resolve_log_level(explicit: Option<&str>) -> String {
    pick(explicit, LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string())
}

fn pick(explicit: Option<&str>, env_key: &str) -> Option<String> {
    non_blank(explicit.map(str::to_string))
        .or_else(|| non_blank(std::env::var(env_key).ok()))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
