//! A single installed icon theme and its lazily populated caches.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use super::descriptor::{INDEX_FILE, PLACES_CONTEXT, ThemeDescriptor};
use super::name::ThemeKey;
use super::size::{DeclaredSize, IconSize, SizeType, select_best_size};
use crate::color::Color;
use crate::config::LocatorConfig;
use crate::folder::FolderKind;

/// Parameters of a folder icon lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconRequest {
    /// Folder kind whose icon is wanted
    pub kind: FolderKind,
    /// Desired pixel size
    pub size: u32,
    /// Display scale factor (1 for normal, 2 for HiDPI)
    pub scale: u32,
}

impl IconRequest {
    /// Create a scale-1 request.
    pub fn new(kind: FolderKind, size: u32) -> Self {
        Self {
            kind,
            size,
            scale: 1,
        }
    }

    /// Set the scale factor.
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// The same request for another folder kind.
    pub fn for_kind(mut self, kind: FolderKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Key of a memoized supported-colors list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ColorCacheKey {
    /// The first list ever computed for the theme
    Theme,
    /// A list computed for one set of kinds at one size
    Request {
        kinds: Vec<FolderKind>,
        size: u32,
        scale: u32,
    },
}

/// An icon theme installation.
///
/// Constructed on demand by the [`ThemeRegistry`](super::ThemeRegistry) and
/// shared by key. Nothing but the caches changes after construction; every
/// cache may be recomputed on a miss.
#[derive(Debug)]
pub struct Theme {
    key: ThemeKey,
    install_root: PathBuf,
    /// Parsed index.theme
    descriptor: RwLock<Option<Arc<ThemeDescriptor>>>,
    /// Resolved icon paths by (kind, size directory)
    icon_paths: RwLock<HashMap<(FolderKind, DeclaredSize), Option<PathBuf>>>,
    /// Supported colors lists
    supported_colors: RwLock<HashMap<ColorCacheKey, Vec<Color>>>,
}

impl Theme {
    /// Create a theme rooted at `install_root`.
    pub fn new(key: ThemeKey, install_root: impl Into<PathBuf>) -> Self {
        Self {
            key,
            install_root: install_root.into(),
            descriptor: RwLock::new(None),
            icon_paths: RwLock::new(HashMap::new()),
            supported_colors: RwLock::new(HashMap::new()),
        }
    }

    /// The theme's identity.
    pub fn key(&self) -> &ThemeKey {
        &self.key
    }

    /// Base name without color suffix.
    pub fn base_name(&self) -> &str {
        self.key.base_name()
    }

    /// Explicit color variant.
    pub fn color_variant(&self) -> Option<Color> {
        self.key.color_variant()
    }

    /// Folder color of this theme, explicit or implicit.
    pub fn color(&self) -> Option<Color> {
        self.key.color()
    }

    /// Directory the theme is installed in.
    pub fn install_root(&self) -> &Path {
        &self.install_root
    }

    /// Path of the theme's descriptor file.
    pub fn index_path(&self) -> PathBuf {
        self.install_root.join(INDEX_FILE)
    }

    /// The parsed descriptor, loaded on first access.
    ///
    /// A missing or unreadable file yields an empty descriptor.
    pub fn descriptor(&self) -> Arc<ThemeDescriptor> {
        if let Some(descriptor) = self.descriptor.read().as_ref() {
            return Arc::clone(descriptor);
        }

        let descriptor = Arc::new(ThemeDescriptor::load_or_default(self.index_path()));
        if let Some(name) = &descriptor.name {
            tracing::debug!(
                target: crate::targets::DESCRIPTOR,
                "Theme {} is named {:?}",
                self.key,
                name
            );
        }
        if descriptor.has_parents() {
            tracing::debug!(
                target: crate::targets::RESOLVER,
                "Theme {} inherits {}",
                self.key,
                descriptor.inherits.join(",")
            );
        }
        *self.descriptor.write() = Some(Arc::clone(&descriptor));
        descriptor
    }

    /// Keys of the declared parent themes, in declaration order.
    pub fn inherited_themes(&self) -> Vec<ThemeKey> {
        self.descriptor()
            .inherits
            .iter()
            .map(|name| ThemeKey::parse(name))
            .collect()
    }

    /// The size directory that best fits a request.
    ///
    /// A theme declaring no `places` sizes falls back to the configured
    /// default directory.
    pub fn best_size(&self, request: &IconRequest, config: &LocatorConfig) -> DeclaredSize {
        let descriptor = self.descriptor();
        select_best_size(
            &descriptor.sizes,
            request.size,
            request.scale,
            config.size_tie_break,
        )
        .unwrap_or_else(|| {
            DeclaredSize::new(IconSize::Pixels(config.fallback_size), SizeType::Fixed)
        })
    }

    /// Path of the icon for a request, if the theme ships one.
    ///
    /// Extensions are probed in configured order; results, including misses,
    /// are memoized per size directory.
    pub fn icon_path(&self, request: &IconRequest, config: &LocatorConfig) -> Option<PathBuf> {
        let size = self.best_size(request, config);
        let cache_key = (request.kind, size);

        if let Some(cached) = self.icon_paths.read().get(&cache_key) {
            return cached.clone();
        }

        let dir = self.install_root.join(size.dir_path(PLACES_CONTEXT));
        let found = config
            .extensions
            .iter()
            .map(|ext| dir.join(format!("{}.{}", request.kind.icon_name(), ext)))
            .find(|path| path.is_file());

        match &found {
            Some(path) => tracing::debug!(
                target: crate::targets::RESOLVER,
                "Found icon for {} at '{}'",
                request.kind,
                path.display()
            ),
            None => tracing::trace!(
                target: crate::targets::RESOLVER,
                "No {} icon in {}",
                request.kind,
                dir.display()
            ),
        }

        self.icon_paths.write().insert(cache_key, found.clone());
        found
    }

    /// Whether the theme ships an icon for a request.
    pub fn has_icon(&self, request: &IconRequest, config: &LocatorConfig) -> bool {
        self.icon_path(request, config).is_some()
    }

    pub(crate) fn cached_colors(&self, key: &ColorCacheKey) -> Option<Vec<Color>> {
        self.supported_colors.read().get(key).cloned()
    }

    pub(crate) fn store_colors(&self, key: ColorCacheKey, colors: Vec<Color>) {
        self.supported_colors.write().insert(key, colors);
    }

    /// Drop every memoized value so the next access re-reads the disk.
    pub fn clear_cache(&self) {
        *self.descriptor.write() = None;
        self.icon_paths.write().clear();
        self.supported_colors.write().clear();
    }
}
