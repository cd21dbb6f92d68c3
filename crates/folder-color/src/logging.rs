//! Subscriber setup for hosts that do not install their own.
//!
//! The level is read from `LOG_FOLDER_COLOR_SWITCHER`. Besides regular
//! `EnvFilter` directives (`debug`, `folder_color_core::resolver=trace`) it
//! accepts the numeric levels file manager extensions traditionally use:
//!
//! | Value | Level   |
//! |-------|---------|
//! | 10    | debug   |
//! | 20    | info    |
//! | 30    | warn    |
//! | 40    | error   |
//! | 50    | error   |
//!
//! Without the variable only warnings and errors are shown.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::{Result, SwitcherError};

/// Environment variable selecting the log level.
pub const LOG_ENV_VAR: &str = "LOG_FOLDER_COLOR_SWITCHER";

/// Level used when the variable is unset or empty.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Map a numeric level to a filter.
///
/// Values between the named levels round up to the next one, so `15`
/// shows info and above.
pub fn level_from_number(level: u32) -> LevelFilter {
    match level {
        0..=9 => LevelFilter::TRACE,
        10 => LevelFilter::DEBUG,
        11..=20 => LevelFilter::INFO,
        21..=30 => LevelFilter::WARN,
        31..=50 => LevelFilter::ERROR,
        _ => LevelFilter::OFF,
    }
}

/// Build the filter for a raw variable value.
pub fn filter_from_value(value: Option<&str>) -> Result<EnvFilter> {
    let value = value.map(str::trim).unwrap_or_default();
    if value.is_empty() {
        return Ok(EnvFilter::default().add_directive(DEFAULT_LEVEL.into()));
    }

    if let Ok(number) = value.parse::<u32>() {
        return Ok(EnvFilter::default().add_directive(level_from_number(number).into()));
    }

    EnvFilter::builder()
        .parse(value)
        .map_err(|e| SwitcherError::LogFilter {
            filter: value.to_string(),
            message: e.to_string(),
        })
}

/// Install a global `fmt` subscriber filtered by [`LOG_ENV_VAR`].
///
/// Fails if the filter is invalid or another subscriber is already set.
pub fn init_logging() -> Result<()> {
    let value = std::env::var(LOG_ENV_VAR).ok();
    let filter = filter_from_value(value.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| SwitcherError::LoggingInitialized(e.to_string()))?;

    tracing::debug!(
        target: folder_color_core::targets::CORE,
        "Logging initialized from {}={:?}",
        LOG_ENV_VAR,
        value
    );
    Ok(())
}
