//! Folder classification.
//!
//! A selected folder is reduced to a [`FolderKind`] before any icon lookup:
//! the user's special directories (home, desktop, downloads, ...) get their
//! dedicated icons, every other folder uses the generic one.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

use directories::{BaseDirs, UserDirs};
use serde::{Deserialize, Serialize};

/// Logical slot a folder occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FolderKind {
    Home,
    Desktop,
    Documents,
    Download,
    Music,
    Pictures,
    PublicShare,
    Templates,
    Videos,
    Generic,
}

impl FolderKind {
    /// Every folder kind.
    pub const ALL: [FolderKind; 10] = [
        FolderKind::Home,
        FolderKind::Desktop,
        FolderKind::Documents,
        FolderKind::Download,
        FolderKind::Music,
        FolderKind::Pictures,
        FolderKind::PublicShare,
        FolderKind::Templates,
        FolderKind::Videos,
        FolderKind::Generic,
    ];

    /// Icon file stem used for this kind inside a theme's `places` context.
    pub fn icon_name(self) -> &'static str {
        match self {
            FolderKind::Home => "folder-home",
            FolderKind::Desktop => "user-desktop",
            FolderKind::Documents => "folder-documents",
            FolderKind::Download => "folder-download",
            FolderKind::Music => "folder-music",
            FolderKind::Pictures => "folder-pictures",
            FolderKind::PublicShare => "folder-publicshare",
            FolderKind::Templates => "folder-templates",
            FolderKind::Videos => "folder-videos",
            FolderKind::Generic => "folder",
        }
    }
}

impl fmt::Display for FolderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.icon_name())
    }
}

/// Mapping from the user's special directories to their folder kinds.
///
/// Resolve once per session with [`SpecialDirs::detect`]; classification is
/// a pure lookup afterwards.
#[derive(Debug, Clone, Default)]
pub struct SpecialDirs {
    kinds: HashMap<PathBuf, FolderKind>,
}

impl SpecialDirs {
    /// Create an empty mapping. Every path classifies as generic.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from explicit entries.
    ///
    /// When two entries name the same path the later one wins.
    pub fn from_entries<P: Into<PathBuf>>(entries: impl IntoIterator<Item = (P, FolderKind)>) -> Self {
        let mut dirs = Self::new();
        for (path, kind) in entries {
            dirs.insert(path, kind);
        }
        dirs
    }

    /// Detect the current user's special directories.
    ///
    /// Directories the platform does not define are skipped. Home is
    /// registered last so a special directory that resolves to home keeps
    /// the home icon.
    pub fn detect() -> Self {
        let mut dirs = Self::new();

        if let Some(user) = UserDirs::new() {
            let entries = [
                (user.desktop_dir(), FolderKind::Desktop),
                (user.document_dir(), FolderKind::Documents),
                (user.download_dir(), FolderKind::Download),
                (user.audio_dir(), FolderKind::Music),
                (user.picture_dir(), FolderKind::Pictures),
                (user.public_dir(), FolderKind::PublicShare),
                (user.template_dir(), FolderKind::Templates),
                (user.video_dir(), FolderKind::Videos),
            ];
            for (path, kind) in entries {
                if let Some(path) = path {
                    dirs.insert(path, kind);
                }
            }
        }

        if let Some(base) = BaseDirs::new() {
            dirs.insert(base.home_dir(), FolderKind::Home);
        }

        tracing::debug!(
            target: crate::targets::FOLDERS,
            "Known directories are: {:?}",
            dirs.kinds
        );
        dirs
    }

    /// Register a special directory.
    pub fn insert(&mut self, path: impl Into<PathBuf>, kind: FolderKind) {
        self.kinds.insert(path.into(), kind);
    }

    /// Classify an absolute folder path.
    ///
    /// Comparison is component-wise, so a trailing separator does not matter.
    pub fn classify(&self, path: impl AsRef<Path>) -> FolderKind {
        self.kinds
            .get(path.as_ref())
            .copied()
            .unwrap_or(FolderKind::Generic)
    }

    /// Number of registered special directories.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether no special directory is registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_names() {
        assert_eq!(FolderKind::Generic.icon_name(), "folder");
        assert_eq!(FolderKind::Desktop.icon_name(), "user-desktop");
        assert_eq!(FolderKind::Home.icon_name(), "folder-home");
        assert_eq!(FolderKind::Videos.to_string(), "folder-videos");
    }

    #[test]
    fn test_icon_names_are_distinct() {
        let names: std::collections::HashSet<&str> =
            FolderKind::ALL.iter().map(|kind| kind.icon_name()).collect();
        assert_eq!(names.len(), FolderKind::ALL.len());
        assert!(FolderKind::ALL.contains(&FolderKind::Generic));
    }

    #[test]
    fn test_classify() {
        let dirs = SpecialDirs::from_entries([
            ("/home/alice/Desktop", FolderKind::Desktop),
            ("/home/alice/Downloads", FolderKind::Download),
            ("/home/alice", FolderKind::Home),
        ]);

        assert_eq!(dirs.classify("/home/alice"), FolderKind::Home);
        assert_eq!(dirs.classify("/home/alice/"), FolderKind::Home);
        assert_eq!(dirs.classify("/home/alice/Downloads"), FolderKind::Download);
        assert_eq!(dirs.classify("/home/alice/Projects"), FolderKind::Generic);
        assert_eq!(dirs.classify("/tmp"), FolderKind::Generic);
    }

    #[test]
    fn test_later_entry_wins() {
        let dirs = SpecialDirs::from_entries([
            ("/home/alice", FolderKind::Desktop),
            ("/home/alice", FolderKind::Home),
        ]);
        assert_eq!(dirs.len(), 1);
        assert_eq!(dirs.classify("/home/alice"), FolderKind::Home);
    }

    #[test]
    fn test_empty_mapping() {
        let dirs = SpecialDirs::new();
        assert!(dirs.is_empty());
        assert_eq!(dirs.classify("/home/alice"), FolderKind::Generic);
    }
}
