//! Structured logging with tracing
//!
//! Centralized subscriber setup for SDK binaries. The `TMS_LOG`
//! environment variable overrides the level passed in settings, using the
//! usual `EnvFilter` directive syntax.

use tms_domain::error::{Error, Result};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Initialize the global subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_logging(level: &str, json_format: bool) -> Result<()> {
    let parsed = parse_log_level(level)?;
    let filter = EnvFilter::try_from_env("TMS_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    // json/plain layers have different types so the branches stay separate
    if json_format {
        let stdout = fmt::layer().json().with_target(true);
        Registry::default()
            .with(filter)
            .with(stdout)
            .try_init()
            .map_err(|e| Error::configuration_with_source("Failed to install subscriber", e))?;
    } else {
        let stdout = fmt::layer().with_target(true);
        Registry::default()
            .with(filter)
            .with(stdout)
            .try_init()
            .map_err(|e| Error::configuration_with_source("Failed to install subscriber", e))?;
    }

    tracing::debug!(level = %parsed, "logging initialized");
    Ok(())
}

/// Parse a log level string to a tracing `Level`
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        other => Err(Error::configuration(format!(
            "Invalid log level: {other}. Use trace, debug, info, warn, or error"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level_accepts_known_levels() {
        assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    }

    #[test]
    fn test_parse_log_level_rejects_garbage() {
        assert!(parse_log_level("loud").is_err());
    }
}
