//! Locator configuration.
//!
//! Configuration is optional: [`LocatorConfig::default`] reproduces the
//! behavior file managers expect. A TOML file can override any field:
//!
//! ```toml
//! icon-roots = ["/usr/share/icons"]
//! extensions = ["svg", "png"]
//! fallback-size = 48
//! size-tie-break = "file-order"   # or "ascending"
//! color-cache = "keyed"           # or "per-theme", "disabled"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::icon_theme::SizeTieBreak;

/// Pixel size used when a theme declares no `places` directories.
pub const DEFAULT_FALLBACK_SIZE: u32 = 48;

/// How supported-color lists are memoized on a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorCachePolicy {
    /// Memoize per (folder kinds, size, scale) request.
    #[default]
    Keyed,
    /// Keep the first list computed for a theme, whatever the request.
    PerTheme,
    /// Recompute on every call.
    Disabled,
}

/// Settings of the icon locator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LocatorConfig {
    /// Directories searched for theme installs, in priority order
    pub icon_roots: Vec<PathBuf>,
    /// Icon file extensions, in probe order
    pub extensions: Vec<String>,
    /// Size directory used when a theme declares none
    pub fallback_size: u32,
    /// Tie-break between equally close sizes
    pub size_tie_break: SizeTieBreak,
    /// Supported-colors memoization
    pub color_cache: ColorCachePolicy,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            icon_roots: default_icon_roots(),
            extensions: vec!["svg".to_string(), "png".to_string()],
            fallback_size: DEFAULT_FALLBACK_SIZE,
            size_tie_break: SizeTieBreak::default(),
            color_cache: ColorCachePolicy::default(),
        }
    }
}

impl LocatorConfig {
    /// Configuration searching only the given icon roots.
    pub fn with_icon_roots<P: Into<PathBuf>>(roots: impl IntoIterator<Item = P>) -> Self {
        Self {
            icon_roots: roots.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the size tie-break policy.
    pub fn with_size_tie_break(mut self, tie_break: SizeTieBreak) -> Self {
        self.size_tie_break = tie_break;
        self
    }

    /// Set the supported-colors cache policy.
    pub fn with_color_cache(mut self, policy: ColorCachePolicy) -> Self {
        self.color_cache = policy;
        self
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| crate::Error::config(None, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| crate::Error::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            crate::Error::Config { message, .. } => {
                crate::Error::config(Some(path.to_path_buf()), message)
            }
            other => other,
        })
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::config(None, e.to_string()))
    }

    fn validate(&self) -> crate::Result<()> {
        if self.fallback_size == 0 {
            return Err(crate::Error::invalid_value(
                "fallback-size",
                "must be a positive pixel size",
            ));
        }
        if self.extensions.is_empty() {
            return Err(crate::Error::invalid_value(
                "extensions",
                "at least one icon extension is required",
            ));
        }
        if let Some(ext) = self.extensions.iter().find(|e| e.is_empty() || e.contains('/')) {
            return Err(crate::Error::invalid_value(
                "extensions",
                format!("'{}' is not a file extension", ext),
            ));
        }
        Ok(())
    }
}

/// Icon theme search roots for the current platform.
///
/// User directories come first so a user install shadows a system one.
#[cfg(target_os = "linux")]
pub fn default_icon_roots() -> Vec<PathBuf> {
    let data_home = std::env::var("XDG_DATA_HOME").ok();
    let data_dirs = std::env::var("XDG_DATA_DIRS").ok();
    let base = directories::BaseDirs::new();
    xdg_icon_roots(
        data_home.as_deref(),
        base.as_ref().map(|b| b.home_dir()),
        data_dirs.as_deref(),
    )
}

/// XDG icon roots from the raw `XDG_DATA_HOME`, home directory and
/// `XDG_DATA_DIRS` values. Empty variables count as unset.
#[cfg(any(target_os = "linux", test))]
fn xdg_icon_roots(data_home: Option<&str>, home: Option<&Path>, data_dirs: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // User icons (XDG_DATA_HOME/icons or ~/.local/share/icons)
    match (data_home, home) {
        (Some(data_home), _) if !data_home.is_empty() => {
            paths.push(PathBuf::from(data_home).join("icons"));
        }
        (_, Some(home)) => paths.push(home.join(".local/share/icons")),
        _ => {}
    }
    if let Some(home) = home {
        paths.push(home.join(".icons"));
    }

    // System icons (XDG_DATA_DIRS/icons)
    match data_dirs {
        Some(data_dirs) if !data_dirs.is_empty() => {
            for dir in data_dirs.split(':').filter(|d| !d.is_empty()) {
                paths.push(PathBuf::from(dir).join("icons"));
            }
        }
        _ => {
            paths.push(PathBuf::from("/usr/local/share/icons"));
            paths.push(PathBuf::from("/usr/share/icons"));
        }
    }

    paths.dedup();
    paths
}

/// Fallback for other platforms.
#[cfg(not(target_os = "linux"))]
pub fn default_icon_roots() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(base) = directories::BaseDirs::new() {
        paths.push(base.data_local_dir().join("icons"));
        paths.push(base.home_dir().join(".icons"));
    }
    paths.push(PathBuf::from("/usr/share/icons"));

    paths
}
