//! Locating and loading the user's locator configuration.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use folder_color_core::LocatorConfig;

use crate::error::Result;

/// Directory name under the user configuration directory.
pub const CONFIG_DIR_NAME: &str = "folder-color";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Path of the user configuration file, e.g.
/// `~/.config/folder-color/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the configuration at `path`, or defaults when the file is absent.
pub fn load_config_from(path: &Path) -> Result<LocatorConfig> {
    if !path.is_file() {
        tracing::debug!(
            target: folder_color_core::targets::CORE,
            "No configuration at '{}', using defaults",
            path.display()
        );
        return Ok(LocatorConfig::default());
    }
    Ok(LocatorConfig::load(path)?)
}

/// Load the user configuration, or defaults when there is none.
pub fn load_config() -> Result<LocatorConfig> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(LocatorConfig::default()),
    }
}
