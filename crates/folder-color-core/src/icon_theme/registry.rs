//! Theme registry.
//!
//! Themes are identified by `(base name, color variant)`. The registry hands
//! out one shared [`Theme`] per key so every lookup of the same theme reuses
//! its memoized descriptor and icon paths.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use super::name::ThemeKey;
use super::theme::Theme;

/// Registry of icon themes installed under a list of icon roots.
#[derive(Debug)]
pub struct ThemeRegistry {
    /// Icon roots, in priority order
    search_paths: Vec<PathBuf>,
    /// Themes constructed so far
    themes: RwLock<HashMap<ThemeKey, Arc<Theme>>>,
}

impl ThemeRegistry {
    /// Create a registry over the given icon roots.
    pub fn new<P: Into<PathBuf>>(search_paths: impl IntoIterator<Item = P>) -> Self {
        let mut paths: Vec<PathBuf> = Vec::new();
        for path in search_paths {
            let path = path.into();
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
        Self {
            search_paths: paths,
            themes: RwLock::new(HashMap::new()),
        }
    }

    /// Icon roots, in priority order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Install root of a theme: the first root holding its directory, or
    /// the first root when none does.
    pub fn install_root(&self, key: &ThemeKey) -> PathBuf {
        let dir_name = key.dir_name();
        self.search_paths
            .iter()
            .map(|root| root.join(&dir_name))
            .find(|path| path.is_dir())
            .or_else(|| self.search_paths.first().map(|root| root.join(&dir_name)))
            .unwrap_or_else(|| PathBuf::from(dir_name))
    }

    /// The shared theme for a key, constructed on first use.
    pub fn theme(&self, key: &ThemeKey) -> Arc<Theme> {
        if let Some(theme) = self.themes.read().get(key) {
            return Arc::clone(theme);
        }

        let theme = Arc::new(Theme::new(key.clone(), self.install_root(key)));
        let mut themes = self.themes.write();
        Arc::clone(themes.entry(key.clone()).or_insert(theme))
    }

    /// The shared theme for a raw theme name such as `Mint-Y-Blue`.
    pub fn theme_by_name(&self, name: &str) -> Arc<Theme> {
        self.theme(&ThemeKey::parse(name))
    }

    /// Whether a theme has been constructed.
    pub fn contains(&self, key: &ThemeKey) -> bool {
        self.themes.read().contains_key(key)
    }

    /// Number of themes constructed so far.
    pub fn len(&self) -> usize {
        self.themes.read().len()
    }

    /// Whether no theme has been constructed yet.
    pub fn is_empty(&self) -> bool {
        self.themes.read().is_empty()
    }

    /// Forget every theme and its caches.
    pub fn clear(&self) {
        self.themes.write().clear();
    }

    /// A theme and all its ancestors, in depth-first declaration order.
    ///
    /// Each theme appears once, so cyclic inheritance terminates.
    pub fn inheritance_chain(&self, theme: &Arc<Theme>) -> Vec<Arc<Theme>> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        self.collect_chain(Arc::clone(theme), &mut visited, &mut chain);
        chain
    }

    fn collect_chain(
        &self,
        theme: Arc<Theme>,
        visited: &mut HashSet<ThemeKey>,
        chain: &mut Vec<Arc<Theme>>,
    ) {
        if !visited.insert(theme.key().clone()) {
            return;
        }
        let parents = theme.inherited_themes();
        chain.push(theme);
        for parent in parents {
            self.collect_chain(self.theme(&parent), visited, chain);
        }
    }
}
