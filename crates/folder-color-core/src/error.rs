//! Error types for theme loading and configuration.
//!
//! Icon resolution itself never fails: a theme that cannot be read simply
//! provides nothing. These errors surface only from the explicit loaders.

use std::path::PathBuf;

/// Result type alias for folder color operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading themes or configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed index.theme descriptor.
    #[error("Invalid theme descriptor '{path}': {message}")]
    Descriptor { path: PathBuf, message: String },

    /// Malformed configuration file.
    #[error("Invalid configuration{}: {message}", quoted_path(.path.as_deref()))]
    Config {
        path: Option<PathBuf>,
        message: String,
    },

    /// Color name outside the fixed palette.
    #[error("Unknown color '{0}'")]
    UnknownColor(String),

    /// Invalid value for a named property.
    #[error("Invalid value for '{property}': {message}")]
    InvalidValue { property: String, message: String },
}

fn quoted_path(path: Option<&std::path::Path>) -> String {
    path.map(|p| format!(" '{}'", p.display()))
        .unwrap_or_default()
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a descriptor error.
    pub fn descriptor(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Descriptor {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(path: Option<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path,
            message: message.into(),
        }
    }

    /// Create a value error.
    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
