//! Rolling file logging for the tracker backend.
//!
//! # Responsibility
//! - Start the `flexi_logger` backend once per process.
//! - Capture panics into the log with a sanitized payload.
//!
//! # Invariants
//! - Initialization never panics.
//! - Repeating initialization with the same level and directory is a no-op.
//! - A different level or directory after initialization is rejected.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "projtrack";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE_LOGGER: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    level: &'static str,
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging at `level` under the absolute directory `log_dir`.
///
/// # Errors
/// - Unsupported level, empty or relative directory.
/// - Directory creation or backend start failure.
/// - Logging already active with a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level = parse_level(level)?;
    let log_dir = parse_log_dir(log_dir)?;

    let active = ACTIVE_LOGGER.get_or_try_init(|| start_logger(level, &log_dir))?;
    ensure_same_config(active, level, &log_dir)
}

/// Active `(level, log_dir)`, or `None` before `init_logging` succeeded.
pub fn logging_status() -> Option<(&'static str, PathBuf)> {
    ACTIVE_LOGGER
        .get()
        .map(|active| (active.level, active.log_dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_logger(level: &'static str, log_dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(log_dir).map_err(|err| {
        format!(
            "failed to create log directory `{}`: {err}",
            log_dir.display()
        )
    })?;

    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    install_panic_hook();

    info!(
        "event=logging_init module=logging status=ok level={} log_dir={} version={} os={}",
        level,
        log_dir.display(),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Ok(ActiveLogger {
        level,
        log_dir: log_dir.to_path_buf(),
        _handle: handle,
    })
}

fn ensure_same_config(active: &ActiveLogger, level: &str, log_dir: &Path) -> Result<(), String> {
    if active.log_dir != log_dir {
        return Err(format!(
            "logging already initialized at `{}`; refusing to switch to `{}`",
            active.log_dir.display(),
            log_dir.display()
        ));
    }
    if active.level != level {
        return Err(format!(
            "logging already initialized with level `{}`; refusing to switch to `{level}`",
            active.level
        ));
    }
    Ok(())
}

fn parse_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(format!(
            "unsupported log level `{other}`; expected trace|debug|info|warn|error"
        )),
    }
}

fn parse_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log_dir cannot be empty".to_string());
    }
    let path = PathBuf::from(trimmed);
    if !path.is_absolute() {
        return Err(format!("log_dir must be an absolute path, got `{trimmed}`"));
    }
    Ok(path)
}

fn install_panic_hook() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic_captured module=logging status=error location={} payload={}",
            location,
            sanitize(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(panic_info);
    }));
}

// Panic payloads may echo project names; keep them single-line and short.
fn sanitize(value: &str, max_chars: usize) -> String {
    let single_line = value.replace(['\n', '\r'], " ");
    let mut truncated: String = single_line.chars().take(max_chars).collect();
    if single_line.chars().count() > max_chars {
        truncated.push_str("...");
    }
    truncated
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, parse_level, parse_log_dir, sanitize};

    #[test]
    fn parse_level_normalizes_case_and_aliases() {
        assert_eq!(parse_level("INFO").unwrap(), "info");
        assert_eq!(parse_level(" warning ").unwrap(), "warn");
        assert!(parse_level("verbose").is_err());
    }

    #[test]
    fn parse_log_dir_rejects_relative_and_empty_paths() {
        assert!(parse_log_dir("logs/dev").unwrap_err().contains("absolute"));
        assert!(parse_log_dir("   ").unwrap_err().contains("empty"));
    }

    #[test]
    fn sanitize_flattens_and_truncates() {
        let sanitized = sanitize("line1\nline2\rline3", 8);
        assert!(!sanitized.contains('\n'));
        assert!(!sanitized.contains('\r'));
        assert!(sanitized.ends_with("..."));
    }

    #[test]
    fn init_is_idempotent_and_rejects_reconfiguration() {
        let log_dir = tempfile::tempdir().unwrap();
        let other_dir = tempfile::tempdir().unwrap();
        let log_dir_str = log_dir.path().to_str().unwrap();
        let other_dir_str = other_dir.path().to_str().unwrap();

        init_logging("info", log_dir_str).expect("first init should succeed");
        init_logging("INFO", log_dir_str).expect("same config should be idempotent");

        let level_error = init_logging("debug", log_dir_str).unwrap_err();
        assert!(level_error.contains("refusing to switch"));
        let dir_error = init_logging("info", other_dir_str).unwrap_err();
        assert!(dir_error.contains("refusing to switch"));

        let (level, dir) = logging_status().expect("logging should be active");
        assert_eq!(level, "info");
        assert_eq!(dir, log_dir.path());
    }
}
