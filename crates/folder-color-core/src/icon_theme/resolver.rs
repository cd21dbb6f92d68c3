//! Inheritance-graph resolution.
//!
//! A theme that lacks a folder icon usually inherits it: Mint-Y-Blue only
//! ships the blue folders and falls back to Mint-Y, then Adwaita, for the
//! rest. [`ThemeGraph`] walks that graph depth-first, parents in declaration
//! order, and reports the first theme that actually ships the asset.

use std::collections::HashSet;
use std::sync::Arc;

use super::name::ThemeKey;
use super::registry::ThemeRegistry;
use super::theme::{IconRequest, Theme};
use crate::config::LocatorConfig;

/// Depth-first resolver over a registry's inheritance graph.
#[derive(Debug, Clone, Copy)]
pub struct ThemeGraph<'a> {
    registry: &'a ThemeRegistry,
    config: &'a LocatorConfig,
}

impl<'a> ThemeGraph<'a> {
    /// Create a resolver over a registry.
    pub fn new(registry: &'a ThemeRegistry, config: &'a LocatorConfig) -> Self {
        Self { registry, config }
    }

    /// Find the first theme, starting with `theme` itself, that ships an
    /// icon for the request at its best-fit size.
    ///
    /// Every theme is probed at most once: revisiting a theme through a
    /// cyclic `Inherits` declaration counts as "does not provide".
    pub fn find_ancestor_providing(
        &self,
        theme: &Arc<Theme>,
        request: &IconRequest,
    ) -> Option<Arc<Theme>> {
        let mut walk = Walk::default();
        self.walk(theme, request, &mut walk)
    }

    fn walk(&self, theme: &Arc<Theme>, request: &IconRequest, walk: &mut Walk) -> Option<Arc<Theme>> {
        let key = theme.key();
        if walk.on_path.contains(key) {
            tracing::warn!(
                target: crate::targets::RESOLVER,
                "Theme {} inherits from itself, ignoring the cycle",
                key
            );
            return None;
        }
        if !walk.visited.insert(key.clone()) {
            // Already probed through another parent.
            return None;
        }

        if theme.has_icon(request, self.config) {
            return Some(Arc::clone(theme));
        }

        walk.on_path.insert(key.clone());
        let mut found = None;
        for parent in theme.inherited_themes() {
            let parent = self.registry.theme(&parent);
            found = self.walk(&parent, request, walk);
            if found.is_some() {
                break;
            }
        }
        walk.on_path.remove(key);

        found
    }
}

/// Bookkeeping of one depth-first walk.
#[derive(Debug, Default)]
struct Walk {
    /// Themes probed so far
    visited: HashSet<ThemeKey>,
    /// Themes on the current inheritance path
    on_path: HashSet<ThemeKey>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::folder::FolderKind;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn theme_dir(root: &Path, name: &str, index: &str, icons: &[&str]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("index.theme"), index).unwrap();
        for icon in icons {
            let path = dir.join(icon);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"<svg/>").unwrap();
        }
    }

    #[test]
    fn test_theme_itself_provides() {
        let root = TempDir::new().unwrap();
        theme_dir(root.path(), "A", "[places/48]\nType=Fixed\n", &["places/48/folder.svg"]);

        let registry = ThemeRegistry::new([root.path()]);
        let config = LocatorConfig::with_icon_roots([root.path()]);
        let graph = ThemeGraph::new(&registry, &config);

        let a = registry.theme_by_name("A");
        let found = graph
            .find_ancestor_providing(&a, &IconRequest::new(FolderKind::Generic, 48))
            .unwrap();
        assert!(Arc::ptr_eq(&found, &a));
    }

    #[test]
    fn test_untyped_scalable_directory_provides() {
        let root = TempDir::new().unwrap();
        theme_dir(root.path(), "Child", "[Icon Theme]\nInherits=Vector\n", &[]);
        theme_dir(
            root.path(),
            "Vector",
            "[Icon Theme]\nName=Vector\n[places/scalable]\nSize=48\n",
            &["places/scalable/folder.svg"],
        );

        let registry = ThemeRegistry::new([root.path()]);
        let config = LocatorConfig::with_icon_roots([root.path()]);
        let graph = ThemeGraph::new(&registry, &config);

        let found = graph
            .find_ancestor_providing(
                &registry.theme_by_name("Child"),
                &IconRequest::new(FolderKind::Generic, 32),
            )
            .unwrap();
        assert_eq!(found.key().to_string(), "Vector");
    }

    #[test]
    fn test_depth_first_declaration_order() {
        let root = TempDir::new().unwrap();
        theme_dir(root.path(), "Child", "[Icon Theme]\nInherits=Left,Right\n", &[]);
        theme_dir(root.path(), "Left", "[Icon Theme]\nInherits=Deep\n", &[]);
        theme_dir(
            root.path(),
            "Right",
            "[places/48]\nType=Fixed\n",
            &["places/48/folder.svg"],
        );
        theme_dir(
            root.path(),
            "Deep",
            "[places/48]\nType=Fixed\n",
            &["places/48/folder.svg"],
        );

        let registry = ThemeRegistry::new([root.path()]);
        let config = LocatorConfig::with_icon_roots([root.path()]);
        let graph = ThemeGraph::new(&registry, &config);

        let found = graph
            .find_ancestor_providing(
                &registry.theme_by_name("Child"),
                &IconRequest::new(FolderKind::Generic, 48),
            )
            .unwrap();
        assert_eq!(found.key().to_string(), "Deep");
    }

    #[test]
    fn test_cycle_terminates() {
        let root = TempDir::new().unwrap();
        theme_dir(root.path(), "A", "[Icon Theme]\nInherits=B\n", &[]);
        theme_dir(root.path(), "B", "[Icon Theme]\nInherits=A\n", &[]);

        let registry = ThemeRegistry::new([root.path()]);
        let config = LocatorConfig::with_icon_roots([root.path()]);
        let graph = ThemeGraph::new(&registry, &config);

        assert!(graph
            .find_ancestor_providing(
                &registry.theme_by_name("A"),
                &IconRequest::new(FolderKind::Generic, 48),
            )
            .is_none());
    }

    #[test]
    fn test_self_inheritance_terminates() {
        let root = TempDir::new().unwrap();
        theme_dir(root.path(), "Loop", "[Icon Theme]\nInherits=Loop\n", &[]);

        let registry = ThemeRegistry::new([root.path()]);
        let config = LocatorConfig::with_icon_roots([root.path()]);
        let graph = ThemeGraph::new(&registry, &config);

        assert!(graph
            .find_ancestor_providing(
                &registry.theme_by_name("Loop"),
                &IconRequest::new(FolderKind::Generic, 48),
            )
            .is_none());
    }

    #[test]
    fn test_kind_specific_lookup() {
        let root = TempDir::new().unwrap();
        theme_dir(
            root.path(),
            "Child",
            "[Icon Theme]\nInherits=Parent\n[places/48]\nType=Fixed\n",
            &["places/48/folder.svg"],
        );
        theme_dir(
            root.path(),
            "Parent",
            "[places/48]\nType=Fixed\n",
            &["places/48/folder-music.png"],
        );

        let registry = ThemeRegistry::new([root.path()]);
        let config = LocatorConfig::with_icon_roots([root.path()]);
        let graph = ThemeGraph::new(&registry, &config);
        let child = registry.theme_by_name("Child");

        let generic = graph
            .find_ancestor_providing(&child, &IconRequest::new(FolderKind::Generic, 48))
            .unwrap();
        assert_eq!(generic.key().to_string(), "Child");

        let music = graph
            .find_ancestor_providing(&child, &IconRequest::new(FolderKind::Music, 48))
            .unwrap();
        assert_eq!(music.key().to_string(), "Parent");

        assert!(graph
            .find_ancestor_providing(&child, &IconRequest::new(FolderKind::Videos, 48))
            .is_none());
    }
}
