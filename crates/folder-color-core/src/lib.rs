//! Icon theme resolution engine for colored folder icons.
//!
//! Icon themes such as Mint-Y ship their folder colors as sibling themes
//! (`Mint-Y-Blue`, `Mint-Y-Red`, ...). This crate answers two questions for a
//! file manager:
//!
//! - **Which file** shows a folder of a given kind in a given color under the
//!   current theme, following `Inherits` chains to the theme that actually
//!   ships folder icons
//! - **Which colors** the current theme can offer for a selection of folders
//!
//! The building blocks are:
//!
//! - [`color`]: the fixed palette and implicit theme colors
//! - [`folder`]: folder kinds and special directory detection
//! - [`icon_theme`]: name parsing, `index.theme` descriptors, size selection
//!   and the inheritance walk
//! - [`locator`]: the colored icon lookup built on top of them
//!
//! # Example
//!
//! ```no_run
//! use folder_color_core::{Color, ColorIconLocator, FolderKind, LocatorConfig};
//!
//! let locator = ColorIconLocator::new(LocatorConfig::default());
//!
//! if let Some(path) = locator.resolve("Mint-Y", Color::Blue, FolderKind::Download, 48) {
//!     println!("{}", path.display());
//! }
//!
//! let theme = locator.theme("Mint-Y");
//! let colors = locator.supported_colors(&theme, &[FolderKind::Generic, FolderKind::Music], 48, 1);
//! println!("{:?}", colors);
//! ```
//!
//! Resolution never returns an error: a missing theme, descriptor or icon
//! simply yields no result. Errors only come from loading configuration.

pub mod color;
pub mod config;
mod error;
pub mod folder;
pub mod icon_theme;
pub mod locator;
pub mod logging;

pub use color::{Color, KNOWN_THEMES, implicit_color};
pub use config::{ColorCachePolicy, DEFAULT_FALLBACK_SIZE, LocatorConfig};
pub use error::{Error, Result};
pub use folder::{FolderKind, SpecialDirs};
pub use icon_theme::{IconRequest, Theme, ThemeKey};
pub use locator::ColorIconLocator;
pub use logging::targets;

/// Common imports.
pub mod prelude {
    pub use crate::{
        Color, ColorCachePolicy, ColorIconLocator, FolderKind, IconRequest, LocatorConfig,
        SpecialDirs, Theme, ThemeKey,
    };
}
