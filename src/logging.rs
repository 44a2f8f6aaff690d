use flexi_logger::{AdaptiveFormat, FlexiLoggerError, Logger, LoggerHandle};

const DEFAULT_LEVEL: &str = "info";

/// Start logging to stderr at `RUST_LOG`, or `info` when it is unset.
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn init() -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(DEFAULT_LEVEL)?
        .log_to_stderr()
        .adaptive_format_for_stderr(AdaptiveFormat::Default)
        .start()
}

/// Switch to the configured level unless `RUST_LOG` overrides it.
pub fn apply_level(handle: &LoggerHandle, level: &str) -> Result<(), FlexiLoggerError> {
    if std::env::var_os("RUST_LOG").is_some() {
        return Ok(());
    }
    handle.parse_new_spec(level)
}
