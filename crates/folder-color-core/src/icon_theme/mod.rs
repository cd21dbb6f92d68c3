//! Icon theme model for folder colors.
//!
//! This module resolves folder icons the way freedesktop icon themes lay
//! them out:
//!
//! - **Theme names**: `<base>-<Color>` variants are parsed into a [`ThemeKey`]
//! - **Descriptors**: `index.theme` gives parents and `places` size directories
//! - **Sizes**: the best declared directory for a desired pixel size
//! - **Inheritance**: depth-first search for the ancestor shipping an icon
//! - **Caching**: one shared [`Theme`] per key, with memoized lookups
//!
//! # Example
//!
//! ```ignore
//! use folder_color_core::icon_theme::{IconRequest, ThemeGraph, ThemeRegistry};
//! use folder_color_core::{FolderKind, LocatorConfig};
//!
//! let config = LocatorConfig::default();
//! let registry = ThemeRegistry::new(config.icon_roots.clone());
//! let graph = ThemeGraph::new(&registry, &config);
//!
//! let theme = registry.theme_by_name("Mint-Y-Blue");
//! let request = IconRequest::new(FolderKind::Download, 48);
//! if let Some(ancestor) = graph.find_ancestor_providing(&theme, &request) {
//!     println!("{} ships the icon", ancestor.key());
//! }
//! ```

mod descriptor;
mod name;
mod registry;
mod resolver;
mod size;
mod theme;

pub use descriptor::{ICON_THEME_SECTION, INDEX_FILE, PLACES_CONTEXT, ThemeDescriptor};
pub use name::{ThemeKey, parse_theme_name};
pub use registry::ThemeRegistry;
pub use resolver::ThemeGraph;
pub use size::{DeclaredSize, IconSize, SizeTieBreak, SizeType, select_best_size};
pub use theme::{IconRequest, Theme};

pub(crate) use theme::ColorCacheKey;
