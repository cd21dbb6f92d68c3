//! The service a file manager extension talks to.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use url::Url;

use folder_color_core::{
    Color, ColorIconLocator, FolderKind, IconRequest, LocatorConfig, SpecialDirs, Theme,
};

use crate::error::Result;
use crate::selection::file_uri;
use crate::settings::load_config;

/// What the host should do with one folder's custom icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconAssignment {
    /// Point the folder's custom icon at `path` (`uri` is its `file://` form).
    Set { path: PathBuf, uri: Url },
    /// Remove the custom icon, restoring the theme default.
    Unset,
    /// The current theme has no icon for this folder in the requested color.
    Missing,
}

/// Folder color switching for one session of a file manager.
///
/// Holds the active icon theme, which the host replaces whenever the
/// desktop's icon theme setting changes.
#[derive(Debug)]
pub struct FolderColorSwitcher {
    locator: ColorIconLocator,
    special_dirs: SpecialDirs,
    theme: RwLock<Arc<Theme>>,
}

impl FolderColorSwitcher {
    /// Create a switcher from the user configuration and the user's
    /// special directories.
    pub fn new(theme_name: &str) -> Result<Self> {
        Ok(Self::with_config(
            theme_name,
            load_config()?,
            SpecialDirs::detect(),
        ))
    }

    /// Create a switcher with explicit settings.
    pub fn with_config(theme_name: &str, config: LocatorConfig, special_dirs: SpecialDirs) -> Self {
        let locator = ColorIconLocator::new(config);
        let theme = locator.theme(theme_name);
        log_theme(&theme);
        Self {
            locator,
            special_dirs,
            theme: RwLock::new(theme),
        }
    }

    /// Switch to another icon theme.
    pub fn update_theme(&self, theme_name: &str) {
        let theme = self.locator.theme(theme_name);
        log_theme(&theme);
        *self.theme.write() = theme;
    }

    /// The active icon theme.
    pub fn current_theme(&self) -> Arc<Theme> {
        Arc::clone(&self.theme.read())
    }

    /// The underlying locator.
    pub fn locator(&self) -> &ColorIconLocator {
        &self.locator
    }

    /// Folder kind of a selected folder.
    pub fn classify(&self, folder: &Path) -> FolderKind {
        self.special_dirs.classify(folder)
    }

    /// Colors that can be applied to every folder of a selection.
    ///
    /// An empty selection offers nothing.
    pub fn supported_colors<P: AsRef<Path>>(&self, folders: &[P], size: u32, scale: u32) -> Vec<Color> {
        if folders.is_empty() {
            return Vec::new();
        }

        let kinds: Vec<FolderKind> = folders.iter().map(|f| self.classify(f.as_ref())).collect();
        let colors = self
            .locator
            .supported_colors(&self.current_theme(), &kinds, size, scale);
        if colors.is_empty() {
            tracing::debug!(
                target: folder_color_core::targets::LOCATOR,
                "Could not find any supported colors"
            );
        }
        colors
    }

    /// Icon file for one folder in `color`.
    pub fn icon_for_folder(&self, color: Color, folder: &Path, size: u32, scale: u32) -> Option<PathBuf> {
        let request = IconRequest::new(self.classify(folder), size).with_scale(scale);
        self.locator.locate(&self.current_theme(), color, &request)
    }

    /// Plan the custom icon change for each folder of a selection.
    ///
    /// `None` restores the default icons. Writing the folder metadata and
    /// triggering a redraw is left to the host.
    pub fn plan_assignments<P: AsRef<Path>>(
        &self,
        color: Option<Color>,
        folders: &[P],
        size: u32,
        scale: u32,
    ) -> Vec<(PathBuf, IconAssignment)> {
        folders
            .iter()
            .map(|folder| {
                let folder = folder.as_ref();
                let assignment = match color {
                    Some(color) => self.assignment_for(color, folder, size, scale),
                    None => IconAssignment::Unset,
                };
                (folder.to_path_buf(), assignment)
            })
            .collect()
    }

    fn assignment_for(&self, color: Color, folder: &Path, size: u32, scale: u32) -> IconAssignment {
        let Some(path) = self.icon_for_folder(color, folder, size, scale) else {
            tracing::error!(
                target: folder_color_core::targets::LOCATOR,
                "Could not find {} colored icon for '{}'",
                color,
                folder.display()
            );
            return IconAssignment::Missing;
        };

        match file_uri(&path) {
            Ok(uri) => {
                tracing::info!(
                    target: folder_color_core::targets::LOCATOR,
                    "Set custom-icon of '{}' to '{}'",
                    folder.display(),
                    path.display()
                );
                IconAssignment::Set { path, uri }
            }
            Err(e) => {
                tracing::error!(target: folder_color_core::targets::LOCATOR, "{}", e);
                IconAssignment::Missing
            }
        }
    }
}

fn log_theme(theme: &Theme) {
    tracing::info!(
        target: folder_color_core::targets::LOCATOR,
        "Current icon theme: {}",
        theme.key()
    );
    match theme.color() {
        Some(color) => tracing::info!(
            target: folder_color_core::targets::LOCATOR,
            "Its color is {}",
            color
        ),
        None => tracing::info!(
            target: folder_color_core::targets::LOCATOR,
            "Its color is unknown"
        ),
    }
}
