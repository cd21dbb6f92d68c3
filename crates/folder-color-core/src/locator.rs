//! Colored folder icon lookup.
//!
//! [`ColorIconLocator`] is the entry point hosts call. It finds the ancestor
//! of the current theme that defines the generic folder icon, swaps in the
//! requested color's sibling theme and returns the sibling's icon file.

use std::path::PathBuf;
use std::sync::Arc;

use crate::color::Color;
use crate::config::{ColorCachePolicy, LocatorConfig};
use crate::folder::FolderKind;
use crate::icon_theme::{ColorCacheKey, IconRequest, Theme, ThemeGraph, ThemeRegistry};
use crate::logging::{ResolveSpan, span_names};

/// Resolves colored folder icons across theme inheritance.
#[derive(Debug)]
pub struct ColorIconLocator {
    registry: ThemeRegistry,
    config: LocatorConfig,
}

impl ColorIconLocator {
    /// Create a locator searching the configured icon roots.
    pub fn new(config: LocatorConfig) -> Self {
        Self {
            registry: ThemeRegistry::new(config.icon_roots.iter().cloned()),
            config,
        }
    }

    /// The locator configuration.
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// The theme registry.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Inheritance resolver over this locator's registry.
    pub fn graph(&self) -> ThemeGraph<'_> {
        ThemeGraph::new(&self.registry, &self.config)
    }

    /// The shared theme for a raw theme name.
    pub fn theme(&self, name: &str) -> Arc<Theme> {
        self.registry.theme_by_name(name)
    }

    /// The theme representing `ancestor` in another color.
    pub fn sibling(&self, ancestor: &Theme, color: Color) -> Arc<Theme> {
        self.registry.theme(&ancestor.key().sibling(color))
    }

    /// Path of the folder icon for `request` in `color`.
    ///
    /// Returns `None` when no ancestor of `theme` defines the generic folder
    /// icon, or when the colored sibling of that ancestor does not ship the
    /// requested icon (including when the sibling is not installed at all).
    pub fn locate(&self, theme: &Arc<Theme>, color: Color, request: &IconRequest) -> Option<PathBuf> {
        tracing::debug!(
            target: crate::targets::LOCATOR,
            "Trying to find icon for {} in {} for theme {}",
            request.kind,
            color,
            theme.key()
        );

        let generic = request.for_kind(FolderKind::Generic);
        let Some(ancestor) = self.graph().find_ancestor_providing(theme, &generic) else {
            tracing::debug!(
                target: crate::targets::LOCATOR,
                "Could not find ancestor defining the folder icon"
            );
            return None;
        };
        tracing::debug!(
            target: crate::targets::LOCATOR,
            "Ancestor defining the folder icon is {}",
            ancestor.key()
        );

        let sibling = self.sibling(&ancestor, color);
        let path = sibling.icon_path(request, &self.config);
        match &path {
            Some(path) => tracing::debug!(
                target: crate::targets::LOCATOR,
                "Icon found at '{}'",
                path.display()
            ),
            None => tracing::debug!(
                target: crate::targets::LOCATOR,
                "No suitable icon in {}",
                sibling.key()
            ),
        }
        path
    }

    /// Resolve a folder icon from a raw theme name.
    pub fn resolve(
        &self,
        theme_name: &str,
        color: Color,
        kind: FolderKind,
        size: u32,
    ) -> Option<PathBuf> {
        let theme = self.theme(theme_name);
        self.locate(&theme, color, &IconRequest::new(kind, size))
    }

    /// Colors available for every folder kind in `kinds`, in palette order.
    ///
    /// A color is offered only if [`locate`](Self::locate) succeeds for each
    /// kind. An empty `kinds` set supports every color. Memoization follows
    /// the configured [`ColorCachePolicy`].
    pub fn supported_colors(
        &self,
        theme: &Arc<Theme>,
        kinds: &[FolderKind],
        size: u32,
        scale: u32,
    ) -> Vec<Color> {
        let mut kinds = kinds.to_vec();
        kinds.sort();
        kinds.dedup();

        let cache_key = match self.config.color_cache {
            ColorCachePolicy::Keyed => Some(ColorCacheKey::Request {
                kinds: kinds.clone(),
                size,
                scale,
            }),
            ColorCachePolicy::PerTheme => Some(ColorCacheKey::Theme),
            ColorCachePolicy::Disabled => None,
        };

        if let Some(key) = &cache_key
            && let Some(colors) = theme.cached_colors(key)
        {
            return colors;
        }

        let _span = ResolveSpan::new(span_names::SUPPORTED_COLORS, &theme.key().to_string());
        let request = IconRequest::new(FolderKind::Generic, size).with_scale(scale);
        let colors: Vec<Color> = Color::ALL
            .into_iter()
            .filter(|color| {
                kinds
                    .iter()
                    .all(|kind| self.locate(theme, *color, &request.for_kind(*kind)).is_some())
            })
            .collect();

        tracing::debug!(
            target: crate::targets::LOCATOR,
            "Theme {} supports {:?} for {:?}",
            theme.key(),
            colors,
            kinds
        );

        if let Some(key) = cache_key {
            theme.store_colors(key, colors.clone());
        }
        colors
    }

    /// Forget all memoized theme data.
    pub fn clear_cache(&self) {
        self.registry.clear();
    }
}
