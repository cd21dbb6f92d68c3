//! Error types for the folder color switcher.

use std::path::PathBuf;

/// Result type alias for switcher operations.
pub type Result<T> = std::result::Result<T, SwitcherError>;

/// Errors surfaced by the switcher outside of icon resolution.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    /// Error from the resolution engine (configuration, color names).
    #[error(transparent)]
    Core(#[from] folder_color_core::Error),

    /// A path that cannot be expressed as a `file://` URI.
    #[error("Cannot build a file URI for '{}'", .0.display())]
    NotAbsolute(PathBuf),

    /// The log filter could not be parsed.
    #[error("Invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },

    /// A global tracing subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    LoggingInitialized(String),
}
